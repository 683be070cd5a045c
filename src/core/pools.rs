/// Static word banks and rule pools shared by the generators.
///
/// All tables are read-only; generators draw from them through the seeded
/// random source, never by position, except for the documented positional
/// backfill in unique sampling.
use crate::schema::input::TechLevel;

/// Biome weighting category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiomeMood {
    Dark,
    Cozy,
    Exotic,
    Neutral,
}

/// A biome with the mood that drives its tone-weighted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiomeEntry {
    pub name: &'static str,
    pub mood: BiomeMood,
}

pub const BIOMES: &[BiomeEntry] = &[
    BiomeEntry { name: "Blighted Marsh", mood: BiomeMood::Dark },
    BiomeEntry { name: "Gallows Moor", mood: BiomeMood::Dark },
    BiomeEntry { name: "Ashen Wastes", mood: BiomeMood::Dark },
    BiomeEntry { name: "Gloom Forest", mood: BiomeMood::Dark },
    BiomeEntry { name: "Meadowlands", mood: BiomeMood::Cozy },
    BiomeEntry { name: "Orchard Vale", mood: BiomeMood::Cozy },
    BiomeEntry { name: "Honeyed Hills", mood: BiomeMood::Cozy },
    BiomeEntry { name: "Lantern Coast", mood: BiomeMood::Cozy },
    BiomeEntry { name: "Shimmerfen", mood: BiomeMood::Exotic },
    BiomeEntry { name: "Floating Reefs", mood: BiomeMood::Exotic },
    BiomeEntry { name: "Singing Dunes", mood: BiomeMood::Exotic },
    BiomeEntry { name: "Glass Steppe", mood: BiomeMood::Exotic },
    BiomeEntry { name: "Highland Pines", mood: BiomeMood::Neutral },
    BiomeEntry { name: "River Delta", mood: BiomeMood::Neutral },
    BiomeEntry { name: "Old Hill Country", mood: BiomeMood::Neutral },
    BiomeEntry { name: "Stormbreak Cliffs", mood: BiomeMood::Neutral },
];

/// The five fixed flavor phrases paired with biome descriptions.
pub const BIOME_FLAVORS: &[&str] = &[
    "where travelers trade warnings more often than goods",
    "scarred by a war nobody admits to starting",
    "whose oldest roads predate every map of them",
    "kept habitable by stubbornness and little else",
    "rumored to move when left unwatched for a season",
];

// World names are built prefix + suffix into a single compound word.

pub const WORLD_NAME_PREFIXES: &[&str] = &[
    "Vael", "Thorn", "Ember", "Grim", "Auren", "Myr", "Kael", "Dral",
    "Sorrow", "Bright", "Umber", "Hollow", "Ast", "Wren", "Mor", "Cinder",
    "Eld", "Ravel", "Sunder", "Quiet",
];

pub const WORLD_NAME_SUFFIXES: &[&str] = &[
    "mar", "eth", "oria", "heim", "fell", "wyn", "gard", "moor",
    "reach", "vale", "spire", "holt", "mere", "crown", "deep", "shore",
];

pub const COSMOLOGY_RULES: &[&str] = &[
    "The moon is a door, and something keeps checking whether it is locked.",
    "Every god here died once already; worship is a form of necromancy.",
    "Stars are wounds in the night sky that never finished closing.",
    "The world was sung into being, and the last verse has not been performed.",
    "Below the deepest caves there is a tide, and it is rising.",
    "Names have weight; speak a true one three times and it will notice.",
    "Seasons are negotiated annually between courts mortals never see.",
    "The horizon is slightly closer every century, and scholars will not say why.",
    "Dreams drain somewhere. Dowsers can find the runoff.",
    "Iron remembers every hand that has held it.",
    "Lightning never strikes the same place twice because the place apologizes.",
    "The dead are not gone, merely unfashionable.",
    "Somewhere there is a first fire still burning, and all flame is borrowed from it.",
    "Maps agree with each other more than they agree with the land.",
];

pub const CONFLICT_POOL: &[&str] = &[
    "An old covenant is failing and both its heirs blame the other.",
    "The last harvest was the third bad one in a row, and granaries are now political.",
    "A border river changed course overnight, taking a town's allegiance with it.",
    "Something is buying up debts across the realm and nobody has met the creditor.",
    "A holy site has begun answering prayers addressed to someone else.",
    "Two trade leagues are fighting a polite, ruinous war of tariffs and arson.",
    "The crown's heir is missing, and four different bodies have been produced as proof.",
    "Refugees from a collapsed realm carry a loyalty nobody can place.",
    "An order of knights has stopped aging, and their neighbors have noticed.",
    "The mines struck something that pays better than gold and costs more than silver.",
    "A plague of honesty is ruining diplomacy in the border courts.",
    "The wilderness is filing claims, through intermediaries, on settled land.",
];

pub const FACTION_ADJECTIVES: &[&str] = &[
    "Emerald", "Silent", "Gilded", "Broken", "Veiled", "Iron", "Crimson",
    "Hollow", "Radiant", "Sable", "Wandering", "Sworn", "Pale", "Thorned",
    "Midnight", "Amber", "Shattered", "Verdant", "Ashbound", "Stormcall",
    "Last", "First", "Unquiet", "Sunken",
];

pub const FACTION_NOUNS: &[&str] = &[
    "Covenant", "Syndicate", "Circle", "Wardens", "Compact", "Choir",
    "Reclaimers", "Court", "Brotherhood", "Assembly", "Vanguard", "Lodge",
    "Accord", "Tide", "Conclave", "Order", "Pact", "League", "Host",
    "Remnant", "Caravan", "Synod", "Banner", "Guild",
];

pub const IDEOLOGIES: &[&str] = &[
    "restoration of a deposed order",
    "profit as the only honest loyalty",
    "stewardship of places older than nations",
    "purity through renunciation",
    "knowledge hoarded against a foreseen disaster",
    "expansion as a moral duty",
    "debt collection across generations",
    "sanctuary for the unwanted",
    "war as the only clean argument",
    "quiet custodianship of dangerous things",
    "the leveling of every throne",
    "commerce with powers best left alone",
    "preservation of bloodlines and their secrets",
    "a bargain struck long ago, still being paid",
];

pub const FACTION_GOALS: &[&str] = &[
    "seize control of a trade artery",
    "recover a relic they insist was stolen",
    "discredit a rival's claim to legitimacy",
    "fortify their homeland against a foreseen collapse",
    "install a sympathizer in a neighboring court",
    "monopolize a scarce resource",
    "erase the records of an old defeat",
    "broker a peace that favors them",
    "awaken something they believe they can control",
    "map a territory no one returns from",
    "buy the loyalty of a mercenary host",
    "outlaw a rival's faith",
    "settle a debt measured in generations",
    "survive the winter with their numbers intact",
];

pub const REGION_NAME_PREFIXES: &[&str] = &[
    "Ashen", "Briar", "Cold", "Duskwall", "Ember", "Fallow", "Gloaming",
    "Harrow", "Iron", "Juniper", "Kestrel", "Low", "Mourning", "North",
    "Raven", "Salt", "Thistle", "Winter",
];

pub const REGION_NAME_SUFFIXES: &[&str] = &[
    "Reaches", "Marches", "Expanse", "Hollows", "Downs", "Barrens",
    "Heights", "Fens", "Wilds", "Flats", "Spires", "Shallows", "Crossing",
    "Verge", "Fields", "Deeps",
];

pub const TOWN_ROOTS: &[&str] = &[
    "Harrow", "Ember", "Bell", "Oster", "Wick", "Marrow", "Fern", "Gull",
    "Tarn", "Alder", "Crag", "Dun", "Hazel", "Ketter", "Lorn", "Myre",
    "Pell", "Rook", "Sedge", "Vant",
];

pub const TOWN_SUFFIXES: &[&str] = &[
    "mere", "fall", "holt", "mark", "stead", "wick", "bury", "ford",
    "haven", "gate", "moor", "field", "row", "cross",
];

pub const CREATURE_POOL: &[&str] = &[
    "gravewights", "marsh serpents", "clockwork crows", "dire boars",
    "hollow knights", "fen witches", "salt golems", "ember drakes",
    "whisper moths", "barrow hounds", "glass spiders", "storm harpies",
    "root trolls", "pale leeches", "mirror shades", "carrion apes",
    "frost revenants", "tunnel worms", "plague rats", "bone heralds",
    "sky rays", "lantern ghouls", "brine hags", "rust beetles",
];

pub const ELITE_EPITHETS: &[&str] = &[
    "Elder", "Rabid", "Vault-born", "Twice-slain", "Gloom-fed", "Warped",
    "Crowned", "Feral",
];

pub const APEX_EPITHETS: &[&str] = &[
    "Sovereign", "Devouring", "Nameless", "Hundred-Year", "Last",
    "Unsleeping",
];

pub const NAMING_RULES: &[&str] = &[
    "Family names outrank given names; strangers trade surnames first.",
    "Places are named for what was lost there, never for founders.",
    "Titles are earned per deed and expire if the deed is forgotten.",
    "Children carry provisional names until their first winter.",
    "Rivers and roads share a single name for their whole length, by law.",
    "The dead are renamed at burial so debts cannot follow them.",
    "Ships and swords are named last, and never after the living.",
    "Third-born children are named by a neighbor, as insurance.",
];

pub const LOOT_FLAVOR: &[&str] = &[
    "inscribed with a ledger of previous owners, most entries crossed out",
    "warm to the touch in a way that has nothing to do with the weather",
    "stamped with the seal of a mint that no longer exists",
    "wrapped in funeral cloth of the wrong era",
    "humming faintly when carried toward water",
    "repaired many times, each repair finer than the original work",
    "etched with a map fragment that matches no known coast",
    "smelling of cedar and, underneath, of smoke",
    "bearing tooth marks that match no catalogued beast",
    "lighter than it should be, as if partly elsewhere",
    "sold with a written apology from the previous owner",
    "banded in a metal that tarnishes in the presence of lies",
];

pub const LOOT_ADJECTIVES: &[&str] = &[
    "tarnished", "ancestral", "contraband", "ceremonial", "salvaged",
    "misappropriated", "votive", "campaign-worn", "dowry", "reliquary",
];

pub const LOOT_MATERIALS: &[&str] = &[
    "bogwood", "meteoric iron", "whale ivory", "tempered glass",
    "braided silver", "chitin", "fired clay", "grave-linen", "horn",
    "riverpearl",
];

pub const MAGIC_FLAVORS: &[&str] = &[
    "Magic here is a borrowed tool; every working leaves a tithe unpaid somewhere.",
    "Spells are sung in a dead language the wind still half-remembers.",
    "Sorcery is plumbing: old channels, older leaks, and nobody left who built them.",
    "Power pools in places and grudges; practitioners are mostly surveyors.",
    "Every enchantment is a contract, and the fine print is in blood.",
    "Magic behaves like weather, and wizards like farmers who gamble on it.",
    "The arcane is a court language: precise, ornamental, and ruinous to misspeak.",
    "What passes for magic is negotiation with things that find mortals funny.",
];

pub const MAGIC_SCHOOLS: &[&str] = &[
    "hearth-warding", "grave-binding", "stormcalling", "threadwork",
    "bonechantry", "tidecraft", "emberwrit", "dreamwalking", "saltscribing",
    "beastspeech",
];

pub const CASTING_TOLLS: &[&str] = &[
    "a memory, chosen by the spell and not the caster",
    "hours of sleep that cannot be repaid in advance",
    "a favor owed, recorded somewhere the caster cannot read",
    "warmth, drawn from the nearest willing fire",
    "a small and permanent dulling of one sense",
    "luck, which the prudent budget for",
];

pub const DUNGEON_PREFIXES: &[&str] = &[
    "Sunken", "Howling", "Forgotten", "Sealed", "Weeping", "Crooked",
    "Flooded", "Starless", "Broken", "Thrice-Locked", "Smoldering",
    "Echoing", "Moss-Eaten", "Black",
];

pub const DUNGEON_SUFFIXES: &[&str] = &[
    "Undercroft", "Catacombs", "Warrens", "Sanctum", "Vaults", "Mineworks",
    "Oubliette", "Barrow", "Cisterns", "Reliquary", "Foundry", "Throat",
];

pub const RUMOR_OPENERS: &[&str] = &[
    "A ferryman swears that",
    "Tavern talk insists",
    "A half-burned letter claims",
    "Caravan guards whisper that",
    "The gravedigger mentions, unprompted, that",
    "A street ballad now alleges",
    "Militia gossip has it that",
    "A pilgrim reports, between prayers, that",
    "The fishwives agree that",
    "A deserter will tell anyone who buys him ale that",
];

pub const NPC_SYLLABLES_FIRST: &[&str] = &[
    "Bran", "Cer", "Dor", "Ela", "Fen", "Gar", "Hest", "Ili", "Jor",
    "Kess", "Lor", "Mab", "Nev", "Ode", "Per", "Quin",
];

pub const NPC_SYLLABLES_SECOND: &[&str] = &[
    "wyn", "dric", "mira", "ton", "la", "rick", "sa", "van", "dell",
    "ira", "mond", "etta", "ric", "wen", "dan", "lis",
];

pub const TRAIT_POOL: &[&str] = &[
    "keeps meticulous grudges", "laughs at funerals", "trusts animals first",
    "collects unpaid debts of kindness", "quotes a dead mentor",
    "never sits with their back to a door", "haggles on principle",
    "adopts lost causes", "counts exits before sitting down",
    "writes letters never sent", "superstitious about borrowed things",
    "forgives too quickly and resents it", "hoards maps",
    "keeps a promise ledger", "lies only about small things",
    "sleeps badly indoors", "names their weapons after relatives",
    "feeds strays in every town",
];

pub const VILLAIN_ARCHETYPES: &[&str] = &[
    "fallen_tyrant", "hollow_prophet", "usurer_king", "grieving_lich",
    "pale_regent", "storm_warden_turned", "smiling_broker", "carrion_saint",
    "exiled_general", "childlike_god",
];

pub const ADDRESS_STYLES: &[&str] = &[
    "by trade and town, never by name alone",
    "with honorifics borrowed from a fallen court",
    "by deed, recent deeds first",
    "with kinship terms extended to strangers",
    "by road-name, which may differ from the home name",
    "formally until a meal has been shared",
];

/// Fixed narrative directives shipped with every DM context.
pub const NARRATIVE_DIRECTIVES: &[&str] = &[
    "Surface one active tension or rumor in every town scene.",
    "Let faction trust shifts show in prices, greetings, and guard posture.",
    "Escalate the villain's reach only on the heels of player action.",
    "Keep the moral climate audible in how bystanders react.",
    "Name the region and its biome when the party crosses a border.",
    "Foreshadow corruption zones before the party enters one.",
];

/// Fixed tactical directives shipped with every DM context.
pub const TACTICAL_DIRECTIVES: &[&str] = &[
    "Scale encounter pressure with the region's dungeon density.",
    "Draw wandering threats from the world's creature pools, not ad hoc.",
    "Use terrain from the region's dominant biome in every set piece.",
    "Let high-power factions field better-equipped patrols.",
    "Honor lethality tier when adjudicating dying and defeat.",
    "Collapsed dungeons stay collapsed; route around them.",
];

/// Background pool for a given technology register.
pub fn backgrounds(tech: TechLevel) -> &'static [&'static str] {
    match tech {
        TechLevel::Primitive => &[
            "firekeeper of a scattered clan",
            "bone-reader cast out for a true omen",
            "flint trader who walks the long paths",
            "herd-guard who outlived the herd",
            "cave painter of things not yet seen",
            "salt pilgrim between tribes",
        ],
        TechLevel::Medieval => &[
            "hedge knight without a hedge to their name",
            "guild apprentice who asked the wrong question",
            "tithe collector who kept the wrong coin",
            "siege survivor with a borrowed name",
            "itinerant scribe of disputed borders",
            "poacher pardoned for one remarkable shot",
        ],
        TechLevel::Steampunk => &[
            "boiler-tender from a decommissioned leviathan",
            "patent clerk who filed something that filed back",
            "airship deserter with impeccable manners",
            "union agitator between blacklistings",
            "automaton groom for a bankrupt estate",
            "cartographer of the new smoke-districts",
        ],
        TechLevel::Modern => &[
            "night-shift archivist of a discredited ministry",
            "demolitions consultant between contracts",
            "court stenographer who heard too much",
            "lighthouse keeper made redundant by progress",
            "insurance investigator of impossible claims",
            "radio operator for a station that never signs off",
        ],
        TechLevel::Futuristic => &[
            "void-dock stevedore with a sealed record",
            "terraform auditor who failed a world on purpose",
            "cryo-warden woken two shifts early",
            "licensed memory broker, license suspended",
            "orbital tithe pilot turned conscientious objector",
            "gene-archive librarian of proscribed lineages",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_populated() {
        assert!(BIOMES.len() >= 12);
        assert!(BIOME_FLAVORS.len() == 5);
        assert!(COSMOLOGY_RULES.len() >= 5, "cosmology pool must cover the large-world draw");
        assert!(CONFLICT_POOL.len() >= 6);
        assert!(FACTION_ADJECTIVES.len() >= 13 && FACTION_NOUNS.len() >= 13);
        assert!(CREATURE_POOL.len() >= 14);
        assert!(TRAIT_POOL.len() >= 3);
        assert!(RUMOR_OPENERS.len() >= 4);
    }

    #[test]
    fn every_tech_level_has_backgrounds() {
        for tech in [
            TechLevel::Primitive,
            TechLevel::Medieval,
            TechLevel::Steampunk,
            TechLevel::Modern,
            TechLevel::Futuristic,
        ] {
            assert!(backgrounds(tech).len() >= 4);
        }
    }

    #[test]
    fn biome_moods_cover_all_categories() {
        for mood in [BiomeMood::Dark, BiomeMood::Cozy, BiomeMood::Exotic, BiomeMood::Neutral] {
            assert!(BIOMES.iter().any(|b| b.mood == mood));
        }
    }
}
