/// Preview: forge a world from the command line and print a summary.
///
/// Usage: preview --title <t> --description <d> [--seed <token>]
///        [--size small|medium|large] [--complexity low|medium|high]
///        [--preset <id>] [--ticks <n>]
use worldforge::schema::input::{
    FactionComplexity, ForgeInput, SeedOverride, WorldSize,
};
use worldforge::schema::state::{ActionImpact, PlayerWorldAction};
use worldforge::{advance_campaign, forge_campaign};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut title = None;
    let mut description = None;
    let mut seed_token = None;
    let mut size = None;
    let mut complexity = None;
    let mut preset = None;
    let mut ticks: u32 = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--title" if i + 1 < args.len() => {
                i += 1;
                title = Some(args[i].clone());
            }
            "--description" if i + 1 < args.len() => {
                i += 1;
                description = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed_token = Some(args[i].clone());
            }
            "--size" if i + 1 < args.len() => {
                i += 1;
                size = match args[i].as_str() {
                    "small" => Some(WorldSize::Small),
                    "medium" => Some(WorldSize::Medium),
                    "large" => Some(WorldSize::Large),
                    other => {
                        eprintln!("Unknown size: {other}");
                        std::process::exit(1);
                    }
                };
            }
            "--complexity" if i + 1 < args.len() => {
                i += 1;
                complexity = match args[i].as_str() {
                    "low" => Some(FactionComplexity::Low),
                    "medium" => Some(FactionComplexity::Medium),
                    "high" => Some(FactionComplexity::High),
                    other => {
                        eprintln!("Unknown complexity: {other}");
                        std::process::exit(1);
                    }
                };
            }
            "--preset" if i + 1 < args.len() => {
                i += 1;
                preset = Some(args[i].clone());
            }
            "--ticks" if i + 1 < args.len() => {
                i += 1;
                ticks = args[i].parse().unwrap_or(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let (Some(title), Some(description)) = (title, description) else {
        eprintln!("--title and --description are required");
        print_usage();
        std::process::exit(1);
    };

    let mut input = ForgeInput::new(title, description);
    input.world_size = size;
    input.faction_complexity = complexity;
    input.tone_preset = preset;
    input.manual_seed = seed_token.map(|t| match t.parse::<i64>() {
        Ok(n) => SeedOverride::Number(n),
        Err(_) => SeedOverride::Text(t),
    });

    let mut ctx = match forge_campaign(&input) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("forge failed: {err}");
            std::process::exit(1);
        }
    };

    println!("World: {}", ctx.world.bible.world_name);
    println!("Seed:  {}", ctx.seed.seed_string);
    println!("Tags:  {}", ctx.seed.theme_tags.join(", "));
    println!("\nMoral climate: {}", ctx.world.bible.moral_climate);
    println!("Magic: {}", ctx.world.magic_rules.flavor);

    println!("\nRegions ({}):", ctx.world.biome_map.regions.len());
    for region in &ctx.world.biome_map.regions {
        println!(
            "  {:<24} {:<18} corruption {:.2}  dungeons {:.2}  capital {}",
            region.name,
            region.dominant_biome,
            region.corruption,
            region.dungeon_density,
            region.capital_town,
        );
    }

    println!("\nFactions ({}):", ctx.world.faction_graph.factions.len());
    for faction in &ctx.world.faction_graph.factions {
        println!(
            "  {:<28} power {:>3}  home {}  ({})",
            faction.name, faction.power_level, faction.home_region_id, faction.ideology,
        );
    }

    println!("\nTensions:");
    for tension in &ctx.world.faction_graph.active_tensions {
        println!("  - {tension}");
    }

    for n in 0..ticks {
        let action = PlayerWorldAction {
            action_type: "expedition".to_string(),
            summary: format!("an expedition pushed into the wilds (day {})", n + 1),
            target_faction_id: None,
            tags: Vec::new(),
            impact: ActionImpact {
                moral: 0.2,
                generosity: 0.1,
                chaos: 0.3,
                brutality: 0.2,
            },
        };
        ctx = match advance_campaign(&ctx, &action) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("tick failed: {err}");
                std::process::exit(1);
            }
        };
    }

    if ticks > 0 {
        let state = &ctx.world.world_state;
        println!("\nAfter {ticks} ticks:");
        println!("  escalation {}", state.villain_escalation);
        println!("  rumors     {}", state.active_rumors.len());
        println!("  collapsed  {}", state.collapsed_dungeons.len());
        if let Some(rumor) = state.active_rumors.last() {
            println!("  latest     {rumor}");
        }
    }
}

fn print_usage() {
    println!("Usage: preview --title <t> --description <d> [--seed <token>]");
    println!("       [--size small|medium|large] [--complexity low|medium|high]");
    println!("       [--preset <id>] [--ticks <n>]");
}
