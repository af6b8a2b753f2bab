//! Local line-oriented driver for the plunder engine.
//!
//! Stands in for the chat-platform transport: reads `.command` lines from
//! stdin, executes them against one engine, and prints the resulting
//! events. `.as` switches the acting user so duels and transfers can be
//! played from both sides in one session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use plunder_execution::{Engine, EngineConfig, JsonStore, Round, Store};
use plunder_types::{
    Amount, CoinSide, Command, DuelChoice, DuelOutcome, Event, LeaderboardCategory,
    LeaderboardDetail, RoundAction, ShopItem, UserId,
};

#[derive(Parser, Debug)]
#[command(name = "plunder", about = "Chat economy game engine (local REPL driver)")]
struct Args {
    /// Account store path.
    #[arg(long, default_value = "plunder.json")]
    data: PathBuf,

    /// Fixed RNG seed for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Acting user at startup; switch later with `.as <user>`.
    #[arg(long, default_value = "player")]
    user: String,

    /// Log engine internals.
    #[arg(long)]
    verbose: bool,
}

struct CommandDef {
    name: &'static str,
    usage: &'static str,
    desc: &'static str,
}

const fn cmd(name: &'static str, usage: &'static str, desc: &'static str) -> CommandDef {
    CommandDef { name, usage, desc }
}

const COMMANDS: &[CommandDef] = &[
    cmd("help", ".help", "Show this table"),
    cmd("as", ".as <user>", "Switch the acting user"),
    cmd("balance", ".balance [user]", "Show wallet and bank"),
    cmd("profile", ".profile [user]", "Show level, credits, booster, partner"),
    cmd("lb", ".lb [economy|levels|marriage]", "Show a leaderboard"),
    cmd("rounds", ".rounds", "List open rounds"),
    cmd("chat", ".chat", "Simulate a chat message (passive rewards)"),
    cmd("deposit", ".deposit <amount>", "Move funds wallet -> bank"),
    cmd("withdraw", ".withdraw <amount>", "Move funds bank -> wallet"),
    cmd("give", ".give <user> <amount>", "Transfer wallet funds"),
    cmd("work", ".work", "Claim a wage (36s cooldown)"),
    cmd("daily", ".daily", "Claim the daily reward (24h cooldown)"),
    cmd("cf", ".cf <heads|tails> <amount>", "Coinflip wager"),
    cmd("mines", ".mines <amount>", "Open a grid-reveal round"),
    cmd("duel", ".duel <user> <amount>", "Challenge to rock-paper-scissors"),
    cmd("round", ".round <id> <accept|decline|rock|paper|scissors|reveal N|cashout>", "Act on a round"),
    cmd("rob", ".rob <user>", "Rob a wallet (2h cooldown)"),
    cmd("heist", ".heist <user>", "Crack a bank (5h cooldown)"),
    cmd("buy", ".buy x2", "Buy a 24h double booster (500 credits)"),
    cmd("marry", ".marry <user>", "Pair with a user"),
    cmd("divorce", ".divorce", "Dissolve the pairing"),
    cmd("quit", ".quit", "Exit"),
];

enum Flow {
    Continue,
    Quit,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    let store = JsonStore::open(&args.data);
    let mut engine = Engine::new(store, EngineConfig { rng_seed: args.seed });
    let mut actor = UserId::new(args.user);

    println!("plunder — type .help for commands");
    let stdin = io::stdin();
    loop {
        print!("{actor}> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match exec_line(&mut engine, &mut actor, line.trim()) {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}

fn exec_line<S: Store>(engine: &mut Engine<S>, actor: &mut UserId, line: &str) -> Flow {
    let line = line.strip_prefix('.').unwrap_or(line);
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Flow::Continue;
    };
    let args = &tokens[1..];
    let now = unix_now();

    match head {
        "quit" | "exit" => return Flow::Quit,
        "help" => {
            for def in COMMANDS {
                println!("{:<14} {:<55} {}", def.name, def.usage, def.desc);
            }
        }
        "as" => match args {
            [user] => {
                *actor = UserId::from(*user);
                println!("acting as {actor}");
            }
            _ => usage("as"),
        },
        "balance" | "bal" => {
            let target = args.first().map(|u| UserId::from(*u));
            let target = target.as_ref().unwrap_or(actor);
            let account = engine.account(target);
            println!(
                "{target}: wallet {} | bank {}",
                account.balances.wallet, account.balances.bank
            );
        }
        "profile" => {
            let target = args.first().map(|u| UserId::from(*u));
            let target = target.as_ref().unwrap_or(actor);
            let profile = engine.profile(target, now);
            let partner = profile
                .partner
                .map(|p| p.to_string())
                .unwrap_or_else(|| "single".to_string());
            let booster = if profile.booster_remaining_secs > 0 {
                format!("{}s left", profile.booster_remaining_secs)
            } else {
                "none".to_string()
            };
            println!(
                "{target}: level {} ({}/{} xp) | credits {} | booster {booster} | partner {partner}",
                profile.level, profile.xp, profile.xp_needed, profile.credits
            );
        }
        "lb" | "leaderboard" => {
            let category = match args.first() {
                Some(raw) => match LeaderboardCategory::from_str(raw) {
                    Ok(category) => category,
                    Err(err) => {
                        println!("error: {err}");
                        return Flow::Continue;
                    }
                },
                None => LeaderboardCategory::Economy,
            };
            let board = engine.leaderboard(category);
            if board.entries.is_empty() {
                println!("no data");
            }
            for entry in board.entries {
                match entry.detail {
                    LeaderboardDetail::NetWorth { total } => {
                        println!("{}. {} — {}", entry.rank, entry.user, total)
                    }
                    LeaderboardDetail::Level { level, xp } => {
                        println!("{}. {} — lvl {} ({} xp)", entry.rank, entry.user, level, xp)
                    }
                    LeaderboardDetail::Marriage { partner, .. } => {
                        println!("{}. {} & {}", entry.rank, entry.user, partner)
                    }
                }
            }
        }
        "rounds" => {
            let mut any = false;
            for (id, round) in engine.rounds() {
                any = true;
                match round {
                    Round::Grid(round) => println!(
                        "#{id} mines: {} bet {} ({} revealed)",
                        round.player, round.bet, round.revealed_count
                    ),
                    Round::Duel(round) => println!(
                        "#{id} duel: {} vs {} for {} ({:?})",
                        round.challenger, round.opponent, round.bet, round.phase
                    ),
                }
            }
            if !any {
                println!("no open rounds");
            }
        }
        "chat" => match engine.record_activity(actor, now) {
            Some(reward) => {
                println!("+{} credits, +{} xp", reward.credits, reward.xp);
                if let Some(level) = reward.leveled_to {
                    println!("{actor} leveled up to {level}!");
                }
            }
            None => println!("(activity window still open)"),
        },
        "deposit" | "dep" => match parse_amount_arg(args) {
            Some(amount) => run(engine, actor, now, Command::Deposit { amount }),
            None => usage("deposit"),
        },
        "withdraw" | "with" => match parse_amount_arg(args) {
            Some(amount) => run(engine, actor, now, Command::Withdraw { amount }),
            None => usage("withdraw"),
        },
        "give" | "pay" => match args {
            [user, raw] => match Amount::parse(raw) {
                Ok(amount) => run(
                    engine,
                    actor,
                    now,
                    Command::Give {
                        to: UserId::from(*user),
                        amount,
                    },
                ),
                Err(err) => println!("error: {err}"),
            },
            _ => usage("give"),
        },
        "work" => run(engine, actor, now, Command::Work),
        "daily" => run(engine, actor, now, Command::Daily),
        "cf" | "coinflip" => match args {
            [side, raw] => match (CoinSide::from_str(side), Amount::parse(raw)) {
                (Ok(side), Ok(amount)) => {
                    run(engine, actor, now, Command::Coinflip { side, amount })
                }
                (Err(err), _) => println!("error: {err}"),
                (_, Err(err)) => println!("error: {err}"),
            },
            _ => usage("cf"),
        },
        "mines" => match parse_amount_arg(args) {
            Some(bet) => run(engine, actor, now, Command::Mines { bet }),
            None => usage("mines"),
        },
        "duel" | "rps" => match args {
            [user, raw] => match Amount::parse(raw) {
                Ok(bet) => run(
                    engine,
                    actor,
                    now,
                    Command::Duel {
                        opponent: UserId::from(*user),
                        bet,
                    },
                ),
                Err(err) => println!("error: {err}"),
            },
            _ => usage("duel"),
        },
        "round" => match parse_round_args(args) {
            Some((id, action)) => run(engine, actor, now, Command::Round { id, action }),
            None => usage("round"),
        },
        "rob" => match args {
            [user] => run(
                engine,
                actor,
                now,
                Command::Rob {
                    target: UserId::from(*user),
                },
            ),
            _ => usage("rob"),
        },
        "heist" => match args {
            [user] => run(
                engine,
                actor,
                now,
                Command::Heist {
                    target: UserId::from(*user),
                },
            ),
            _ => usage("heist"),
        },
        "buy" => match args {
            [raw] => match ShopItem::from_str(raw) {
                Ok(item) => run(engine, actor, now, Command::Buy { item }),
                Err(err) => println!("error: {err}"),
            },
            _ => usage("buy"),
        },
        "marry" => match args {
            [user] => run(
                engine,
                actor,
                now,
                Command::Marry {
                    partner: UserId::from(*user),
                },
            ),
            _ => usage("marry"),
        },
        "divorce" => run(engine, actor, now, Command::Divorce),
        other => println!("unknown command {other:?}; try .help"),
    }
    Flow::Continue
}

fn usage(name: &str) {
    if let Some(def) = COMMANDS.iter().find(|def| def.name == name) {
        println!("usage: {}", def.usage);
    }
}

fn parse_amount_arg(args: &[&str]) -> Option<Amount> {
    match args {
        [raw] => match Amount::parse(raw) {
            Ok(amount) => Some(amount),
            Err(err) => {
                println!("error: {err}");
                None
            }
        },
        _ => None,
    }
}

fn parse_round_args(args: &[&str]) -> Option<(u64, RoundAction)> {
    let (&id, rest) = args.split_first()?;
    let id = id.parse::<u64>().ok()?;
    let action = match rest {
        ["accept"] => RoundAction::Accept,
        ["decline"] => RoundAction::Decline,
        ["cashout"] => RoundAction::CashOut,
        ["reveal", cell] => RoundAction::Reveal(cell.parse::<u8>().ok()?),
        [choice] => RoundAction::Choose(DuelChoice::from_str(choice).ok()?),
        _ => return None,
    };
    Some((id, action))
}

fn run<S: Store>(engine: &mut Engine<S>, actor: &UserId, now: u64, command: Command) {
    match engine.execute(actor, now, command) {
        Ok(events) => {
            for event in events {
                render(&event);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn render(event: &Event) {
    match event {
        Event::Deposited {
            amount,
            wallet,
            bank,
            ..
        } => println!("deposited {amount} (wallet {wallet}, bank {bank})"),
        Event::Withdrew {
            amount,
            wallet,
            bank,
            ..
        } => println!("withdrew {amount} (wallet {wallet}, bank {bank})"),
        Event::Transferred { from, to, amount } => {
            println!("{from} gave {amount} to {to}")
        }
        Event::Worked {
            payout,
            boosted,
            wallet,
            ..
        } => println!(
            "earned {payout}{} (wallet {wallet})",
            if *boosted { " (boosted)" } else { "" }
        ),
        Event::DailyClaimed {
            reward,
            boosted,
            wallet,
            ..
        } => println!(
            "claimed {reward}{} (wallet {wallet})",
            if *boosted { " (boosted)" } else { "" }
        ),
        Event::CoinflipResolved {
            landed,
            delta,
            wallet,
            ..
        } => {
            let landed = match landed {
                CoinSide::Heads => "heads",
                CoinSide::Tails => "tails",
            };
            if *delta >= 0 {
                println!("{landed}! won {delta} (wallet {wallet})");
            } else {
                println!("{landed}... lost {} (wallet {wallet})", -delta);
            }
        }
        Event::GridOpened { id, bet, .. } => println!(
            "mines round #{id} open, bet {bet} — .round {id} reveal <0-8> | .round {id} cashout"
        ),
        Event::CellRevealed {
            id,
            cell,
            revealed_count,
            multiplier_bps,
        } => println!(
            "round #{id}: cell {cell} safe ({revealed_count} revealed, cashout {:.1}x)",
            *multiplier_bps as f64 / 10_000.0
        ),
        Event::GridBusted { id, bet, wallet, .. } => {
            println!("round #{id}: BOOM. lost {bet} (wallet {wallet})")
        }
        Event::GridCashedOut {
            id,
            net,
            multiplier_bps,
            boosted,
            wallet,
            ..
        } => println!(
            "round #{id}: cashed out at {:.1}x{} — net {net:+} (wallet {wallet})",
            *multiplier_bps as f64 / 10_000.0,
            if *boosted { " (boosted)" } else { "" }
        ),
        Event::DuelProposed {
            id,
            challenger,
            opponent,
            bet,
        } => println!(
            "duel #{id}: {challenger} challenges {opponent} for {bet} — .round {id} accept | .round {id} decline"
        ),
        Event::DuelAccepted { id } => {
            println!("duel #{id} on — .round {id} rock|paper|scissors")
        }
        Event::DuelDeclined { id } => println!("duel #{id} declined"),
        Event::DuelChoiceRecorded { id, user } => {
            println!("duel #{id}: {user} locked a choice")
        }
        Event::DuelSettled { id, outcome } => match outcome {
            DuelOutcome::Draw => println!("duel #{id}: draw, stakes returned"),
            DuelOutcome::Won {
                winner,
                loser,
                amount,
            } => println!("duel #{id}: {winner} takes {amount} from {loser}"),
        },
        Event::RobSucceeded { target, stolen, .. } => {
            println!("stole {stolen} from {target}")
        }
        Event::RobFailed { fine, .. } => println!("busted! paid a {fine} fine"),
        Event::HeistSucceeded { target, stolen, .. } => {
            println!("vault cracked! took {stolen} from {target}")
        }
        Event::HeistFailed { fine, .. } => println!("busted! lost {fine} from bank"),
        Event::BoosterActivated { expires_at, .. } => {
            println!("booster active until {expires_at} (2x rewards)")
        }
        Event::Married { user, partner, .. } => println!("{user} and {partner} are married"),
        Event::Divorced { user, partner } => println!("{user} and {partner} divorced"),
    }
}
