use clap::{Parser, Subcommand};
use clashtrack_coc_api::Client;
use clashtrack_shared::{
    Clan, FilterOptions, Player, SeasonInfo,
    traits::api::{ClanApi, PlayerApi},
};
use config::Config;
use error::AppError;
use tracing::info;

mod config;
mod error;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "clashtrack", version, about = "Look up Clash of Clans players and clans")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a player profile
    Player { tag: String },
    /// Show a clan and its roster
    Clan { tag: String },
    /// Fetch the full profile of every clan member
    Members {
        tag: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the current trophy season window
    Season,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init()?;
    let cli = Cli::parse();

    if let Command::Season = cli.command {
        print_season(&SeasonInfo::current());
        return Ok(());
    }

    let config = Config::from_env()?;
    let client = Client::new(config.client_options());
    info!("🛰️ querying {:?}", cli.command);

    let result = run(&client, cli.command).await;
    client.metrics().log_summary();
    result
}

async fn run(client: &Client, command: Command) -> Result<(), AppError> {
    match command {
        Command::Player { tag } => {
            let player = client.get_player(&tag).await?;
            print_player(&player);
        }
        Command::Clan { tag } => {
            let clan = client.get_clan(&tag).await?;
            print_clan(&clan);
        }
        Command::Members { tag, limit } => {
            let filters = limit.map(FilterOptions::with_limit);
            let outcomes = client.detailed_clan_members(&tag, filters).await?;
            let failed = outcomes.iter().filter(|o| o.is_err()).count();
            for outcome in outcomes {
                match outcome {
                    Ok(p) => println!(
                        "{:<12} {:<16} TH{:<2} {:>5} 🏆 {}",
                        p.tag, p.name, p.town_hall_level, p.trophies, p.league.name
                    ),
                    Err(e) => println!("failed: {e}"),
                }
            }
            if failed > 0 {
                tracing::warn!("{} member lookups failed", failed);
            }
        }
        Command::Season => print_season(&client.season_info()),
    }

    Ok(())
}

fn print_player(p: &Player) {
    println!("{} ({})", p.name, p.tag);
    println!("  Town Hall {} | XP {}", p.town_hall_level, p.exp_level);
    println!(
        "  Trophies {} (best {}) | {}",
        p.trophies, p.best_trophies, p.league.name
    );
    println!("  War stars {} | Donations {}/{}", p.war_stars, p.donations, p.received);
    match (&p.clan, p.role) {
        (Some(clan), Some(role)) => println!("  Clan {} ({}) as {}", clan.name, clan.tag, role),
        (Some(clan), None) => println!("  Clan {} ({})", clan.name, clan.tag),
        _ => println!("  No clan"),
    }
    if let Some(legend) = &p.legend_statistics {
        println!("  Legend trophies {}", legend.legend_trophies);
    }

    let names = |units: Vec<&clashtrack_shared::Troop>| {
        units
            .iter()
            .map(|u| format!("{} {}", u.name, u.level))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("  Home troops: {}", names(p.home_troops().collect()));
    println!("  Builder troops: {}", names(p.builder_troops().collect()));
    println!("  Super troops: {}", names(p.active_super_troops().collect()));
    println!("  Siege machines: {}", names(p.siege_machines().collect()));
    println!("  Pets: {}", names(p.hero_pets().collect()));
}

fn print_clan(c: &Clan) {
    println!("{} ({}) level {}", c.name, c.tag, c.level);
    if let Some(location) = &c.location {
        println!("  Location {}", location.name);
    }
    println!(
        "  {} members | {} points | war wins {} | streak {}",
        c.member_count, c.points, c.war_wins, c.war_win_streak
    );
    for m in &c.members {
        println!(
            "  {:>2}. {:<16} {:<9} {:>5} 🏆",
            m.clan_rank, m.name, m.role, m.trophies
        );
    }
}

fn print_season(s: &SeasonInfo) {
    println!(
        "Season {}: {} -> {}",
        s.season_id,
        s.season_start.format("%Y-%m-%d %H:%M UTC"),
        s.season_end.format("%Y-%m-%d %H:%M UTC")
    );
}
