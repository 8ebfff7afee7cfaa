//! Maps osrsbox numeric category ids (with an item-name fallback) onto the
//! coarse [`Category`] set shown to the user.

use super::entities::Category;

/// osrsbox-db category id → English name. Linear scan keeps the table a
/// plain literal; id 78 is listed twice upstream and the duplicate is kept
/// as-is (first entry wins, both map to the same value).
const CATEGORY_ID_NAMES: &[(u16, &str)] = &[
    (1, "Ammunition"),
    (2, "Arrows"),
    (3, "Axes"),
    (4, "Body"),
    (5, "Boots"),
    (6, "Bows"),
    (7, "Capes"),
    (8, "Daggers"),
    (9, "Gloves"),
    (10, "Hats"),
    (11, "Legs"),
    (12, "Magic Weapons"),
    (13, "Necklaces"),
    (14, "Other"),
    (15, "Platebodies"),
    (16, "Polearms"),
    (17, "Ranged Weapons"),
    (18, "Rings"),
    (19, "Runes"),
    (20, "Shields"),
    (21, "Staves"),
    (22, "Swords"),
    (23, "Whips"),
    (24, "Amulets"),
    (25, "Crossbows"),
    (26, "Dart Tips"),
    (27, "Darts"),
    (28, "Javelins"),
    (29, "Knives"),
    (30, "Bolts"),
    (31, "Pickaxes"),
    (32, "Fishing Rods"),
    (33, "Harpoons"),
    (34, "Nets"),
    (35, "Bags"),
    (36, "Containers"),
    (37, "Consumables"),
    (38, "Potions"),
    (39, "Herbs"),
    (40, "Seeds"),
    (41, "Ores and Bars"),
    (42, "Logs"),
    (43, "Food"),
    (44, "Fish"),
    (45, "Bones"),
    (46, "Gems"),
    (47, "Miscellaneous"),
    (48, "Tools"),
    (49, "Spells"),
    (50, "Teleportation"),
    (51, "Crafting materials"),
    (52, "Farming"),
    (53, "Construction"),
    (54, "Smithing"),
    (55, "Cooking"),
    (56, "Firemaking"),
    (57, "Fletching"),
    (58, "Runecrafting"),
    (59, "Mining"),
    (60, "Woodcutting"),
    (61, "Fishing"),
    (62, "Hunter"),
    (63, "Thieving"),
    (64, "Agility"),
    (65, "Quests"),
    (66, "Holiday"),
    (67, "Tradeable"),
    (68, "Untradeable"),
    (69, "Members"),
    (70, "Free to play"),
    (71, "Dyeable"),
    (72, "Degradable"),
    (73, "Chargeable"),
    (74, "Stackable"),
    (75, "Noted"),
    (76, "Quest Items"),
    (77, "Achievement Diaries"),
    (78, "Clues"),
    (78, "Clues"),
    (79, "Collection Logs"),
    (80, "Bounty Hunter"),
    (81, "Slayer"),
    (82, "Construction Materials"),
    (83, "Jewellery"),
    (84, "Spirit Shields"),
    (85, "God books"),
    (86, "Ornament kits"),
    (87, "Imbuable"),
    (88, "Skilling"),
    (89, "Combat"),
    (90, "Boss drops"),
    (91, "Minigame rewards"),
    (92, "Treasure Trails"),
    (93, "Grand Exchange"),
    (94, "Shop supplies"),
    (95, "Diary rewards"),
    (96, "Achievement Cape"),
    (97, "Music Cape"),
    (98, "Quest Cape"),
    (99, "Max Cape"),
    (100, "Trimmed Max Cape"),
    (101, "Veteran Cape"),
    (102, "Classic Cape"),
    (103, "Master Combat Cape"),
    (104, "Master Skilling Cape"),
    (105, "Completionist Cape"),
    (106, "Master Quest Cape"),
    (107, "Ultimate Ironman"),
    (108, "Hardcore Ironman"),
    (109, "Ironman"),
    (110, "Seasonal"),
    (111, "Deadman Mode"),
    (112, "League"),
    (113, "Pest Control"),
    (114, "Slayer Helmets"),
    (115, "Godswords"),
    (116, "Dragonfire Shields"),
    (117, "Barrows equipment"),
    (118, "Dragon equipment"),
    (119, "Rune equipment"),
    (120, "Adamant equipment"),
    (121, "Mithril equipment"),
    (122, "Steel equipment"),
    (123, "Iron equipment"),
    (124, "Bronze equipment"),
    (125, "Black equipment"),
    (126, "White equipment"),
    (127, "Guthix Vestments"),
    (128, "Saradomin Vestments"),
    (129, "Zamorak Vestments"),
    (130, "Armadyl armour"),
    (131, "Bandos armour"),
    (132, "Ancient armour"),
    (133, "Ancestral robes"),
    (134, "Void Knight armour"),
    (135, "Skeletal armour"),
    (136, "Proselyte armour"),
    (137, "Obsidian armour"),
    (138, "Crystal equipment"),
    (139, "Tears of Guthix"),
    (140, "Dagannoth Kings"),
    (141, "God Wars Dungeon"),
    (142, "Zulrah"),
    (143, "Vorkath"),
    (144, "Demonic Gorillas"),
    (145, "Abyssal Sire"),
    (146, "Cerberus"),
    (147, "Kraken"),
    (148, "Thermonuclear Smoke Devil"),
    (149, "Grotesque Guardians"),
    (150, "Barrows"),
    (151, "Pest Control"),
    (152, "Pyramid Plunder"),
    (153, "Barbarian Assault"),
    (154, "Fight Caves"),
    (155, "Inferno"),
    (156, "Theatre of Blood"),
    (157, "Chambers of Xeric"),
    (158, "Nightmare"),
    (159, "Gauntlet"),
    (160, "Vardorvis"),
    (161, "Duke Sucellus"),
    (162, "The Leviathan"),
    (163, "The Whisperer"),
    (164, "Phantom Muspah"),
    (165, "ToA"),
    (166, "Desert Treasure II"),
    (167, "Forestry"),
];

/// Ordered grouping rules over the lower-cased osrsbox category name.
/// Tested top to bottom; first match wins.
const GROUP_RULES: &[(&[&str], Category)] = &[
    (
        &[
            "weapons",
            "magic weapons",
            "ranged weapons",
            "slash weapons",
            "stab weapons",
            "blunt weapons",
            "thrown weapons",
            "axes",
            "bows",
            "daggers",
            "polearms",
            "staves",
            "swords",
            "whips",
            "crossbows",
        ],
        Category::Weapons,
    ),
    (
        &[
            "head",
            "cape",
            "neck",
            "amulets",
            "body",
            "shields",
            "legs",
            "hands",
            "feet",
            "rings",
            "armour",
            "gloves",
            "boots",
            "platebodies",
            "jewellery",
            "spirit shields",
            "god books",
            "ornament kits",
            "imbued",
            "chargeable",
            "degradable",
            "slayer helmets",
            "godswords",
            "dragonfire shields",
            "barrows equipment",
            "dragon equipment",
            "rune equipment",
            "adamant equipment",
            "mithril equipment",
            "steel equipment",
            "iron equipment",
            "bronze equipment",
            "black equipment",
            "white equipment",
            "guthix vestments",
            "saradomin vestments",
            "zamorak vestments",
            "armadyl armour",
            "bandos armour",
            "ancient armour",
            "ancestral robes",
            "void knight armour",
            "skeletal armour",
            "proselyte armour",
            "obsidian armour",
            "crystal equipment",
        ],
        Category::ArmourAndEquipment,
    ),
    (&["ores and bars"], Category::OresAndBars),
    (&["logs"], Category::Logs),
    (&["potions"], Category::Potions),
    (&["runes"], Category::Runes),
    (
        &["bolts", "arrows", "darts", "javelins", "knives", "dart tips", "ammunition"],
        Category::Ammunition,
    ),
    (&["seeds", "farming"], Category::Farming),
    (
        &["herblore", "herbs", "vials", "bones", "gems", "crafting materials"],
        Category::CraftingMaterials,
    ),
    (&["food", "fish", "consumables"], Category::FoodAndConsumables),
    (
        &["tools", "pickaxes", "fishing rods", "harpoons", "nets"],
        Category::Tools,
    ),
    (
        &[
            "construction materials",
            "construction",
            "smithing",
            "cooking",
            "firemaking",
            "fletching",
            "runecrafting",
            "skilling",
        ],
        Category::ProductionSkills,
    ),
    (&["spells", "teleportation"], Category::MagicAndTeleport),
    (&["containers", "bags"], Category::ContainersAndBags),
    (
        &[
            "quest items",
            "clues",
            "collection logs",
            "achievement diaries",
            "diary rewards",
            "achievement cape",
            "music cape",
            "quest cape",
            "max cape",
            "trimmed max cape",
            "veteran cape",
            "classic cape",
            "master combat cape",
            "master skilling cape",
            "completionist cape",
            "master quest cape",
        ],
        Category::QuestAndAchievementItems,
    ),
    (
        &[
            "boss drops",
            "minigame rewards",
            "treasure trails",
            "bounty hunter",
            "slayer",
            "combat",
        ],
        Category::RewardsAndDrops,
    ),
    (&["grand exchange", "shop supplies"], Category::TradeAndShop),
];

fn category_id_name(id: u16) -> Option<&'static str> {
    CATEGORY_ID_NAMES
        .iter()
        .find(|(cid, _)| *cid == id)
        .map(|(_, name)| *name)
}

/// Classifies an item. Resolves the category id through the static table
/// (unknown ids resolve to the empty string), walks the ordered group
/// rules, then falls back to substring checks on the item name. Total:
/// always returns exactly one category.
pub fn classify(category_id: u16, item_name: &str) -> Category {
    let resolved = category_id_name(category_id)
        .unwrap_or("")
        .to_lowercase();

    for (group, category) in GROUP_RULES {
        if group.contains(&resolved.as_str()) {
            return *category;
        }
    }

    // Secondary heuristic only; never reordered ahead of the id rules.
    let name = item_name.to_lowercase();
    if name.contains("ore") || name.contains("bar") {
        return Category::OresAndBars;
    }
    if name.contains("logs") || name.contains("plank") {
        return Category::Logs;
    }
    if name.contains("potion") {
        return Category::Potions;
    }
    if name.contains("rune") {
        return Category::Runes;
    }
    if name.contains("food") || name.contains("fish") {
        return Category::FoodAndConsumables;
    }

    Category::Other
}
