use angler::bosses::{all_bosses, find_boss, BossDefinition};
use angler::config::EngineConfig;
use angler::console::{SystemClock, TerminalConsole};
use angler::encounter::{admit, play_admitted};
use angler::error::{GameError, Result};
use angler::outcome::EncounterResult;
use angler::profile::{load_profile, save_profile, PlayerProfile};
use angler::utils::{logging, version_line};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("angler: {}", e);
        if matches!(e, GameError::Usage(_)) {
            eprintln!("Run 'angler --help' for usage.");
        }
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let mut config = EngineConfig::load();
    let rest = config.apply_flags(args)?;

    match rest.first().map(String::as_str) {
        None | Some("--help") | Some("-h") => print_help(),
        Some("--version") | Some("-v") => println!("{}", version_line()),
        Some("bosses") => print_bosses(&load_profile()),
        Some("profile") => print_profile(&load_profile()),
        Some("fight") => {
            let id = rest
                .get(1)
                .ok_or_else(|| GameError::Usage("fight needs a boss id".to_string()))?;
            fight(id, &config)?;
        }
        Some(other) => return Err(GameError::Usage(format!("unknown command: {}", other))),
    }
    Ok(())
}

fn fight(id: &str, config: &EngineConfig) -> Result<()> {
    let def = find_boss(id).ok_or_else(|| GameError::UnknownBoss(id.to_string()))?;
    let level = if config.debug { "debug" } else { "info" };
    let _guard = logging::init_file_logging(level)?;

    let mut profile = load_profile();
    let tier = admit(&mut profile, &def, config)?;
    // The item is gone from here on, even if the terminal fails to start.
    save_profile(&profile)?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let console = TerminalConsole::new(config.skip_animations)?;
    let result = play_admitted(&mut profile, &def, config, tier, console, SystemClock::new(), rng);
    save_profile(&profile)?;

    print_result(&def, &result, &profile);
    Ok(())
}

fn print_result(def: &BossDefinition, result: &EncounterResult, profile: &PlayerProfile) {
    println!("{} - {}", def.name, result.outcome.name());
    if result.reputation_delta != 0 {
        println!("  Reputation {:+}", result.reputation_delta);
    }
    if result.currency_reward != 0 {
        println!("  Coins      {:+}", result.currency_reward);
    }
    if result.xp_reward != 0 {
        println!("  XP         +{}", result.xp_reward);
    }
    for item in &result.items_lost {
        println!("  Lost       {}", item);
    }
    if result.unlock_flag.is_some() {
        println!("  {} has been added to your journal.", def.name);
    }
    println!(
        "Now holding {} coins, reputation {}.",
        profile.currency, profile.reputation
    );
}

fn print_bosses(profile: &PlayerProfile) {
    for def in all_bosses() {
        let status = if profile.has_resolved(def.id) {
            "resolved"
        } else if profile.has_item(def.summon_item) {
            "ready"
        } else {
            "needs item"
        };
        println!(
            "{:<20} {:<18} HP {:>3}  DEF {:>2}  summon: {:<16} [{}]",
            def.id, def.name, def.max_health, def.defense, def.summon_item, status
        );
    }
}

fn print_profile(profile: &PlayerProfile) {
    println!("{}", profile.name);
    println!(
        "  STR {}  LUCK {}  PAT {}",
        profile.stats.strength, profile.stats.luck, profile.stats.patience
    );
    println!(
        "  Gear: +{} ATK  +{} DEF  +{} HP",
        profile.equipment.attack, profile.equipment.defense, profile.equipment.max_hp
    );
    println!(
        "  Coins {}  Reputation {}  XP {}",
        profile.currency, profile.reputation, profile.xp
    );
    println!("  Inventory: {}", profile.inventory.join(", "));
    let resolved: Vec<&str> = profile.resolved_bosses.iter().map(String::as_str).collect();
    println!("  Resolved: {}", resolved.join(", "));
}

fn print_help() {
    println!("Angler - boss encounters for a terminal fishing game\n");
    println!("Usage: angler [options] <command>\n");
    println!("Commands:");
    println!("  bosses             List bosses and whether you can summon them");
    println!("  fight <boss-id>    Use the boss's summon item and start the encounter");
    println!("  profile            Show your profile");
    println!("  --version          Show version information");
    println!("  --help             Show this help message\n");
    println!("Options:");
    println!("  --difficulty <d>   easy, normal or hard");
    println!("  --seed <n>         Fixed random seed");
    println!("  --rematch <p>      block, reduced or unrestricted");
    println!("  --invincible       Take no damage");
    println!("  --fast             Skip cosmetic pauses");
    println!("  --debug            Debug logging; summon items not required");
}
