mod economy;
mod raids;
mod social;
mod wagers;
