use serde::Serialize;

/// Item metadata from osrsbox-db.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// True for subscription-only (P2P) items.
    pub members: bool,
    /// High Alchemy yield in GP. Zero when the item cannot be alched.
    pub highalch: i64,
    /// osrsbox numeric category id. Zero when uncategorized.
    pub category_id: u16,
}

/// Live Grand Exchange quote from the OSRS Wiki price API.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceQuote {
    pub id: u32,
    /// Instant-buy price (the API's `high`). Zero for illiquid items.
    pub buy: i64,
    /// Instant-sell price (the API's `low`). Zero for illiquid items.
    pub sell: i64,
}

/// Coarse user-facing item categories. The classifier always resolves to
/// exactly one of these; `Other` is the sentinel for everything unmatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Weapons,
    ArmourAndEquipment,
    OresAndBars,
    Logs,
    Potions,
    Runes,
    Ammunition,
    Farming,
    CraftingMaterials,
    FoodAndConsumables,
    Tools,
    ProductionSkills,
    MagicAndTeleport,
    ContainersAndBags,
    QuestAndAchievementItems,
    RewardsAndDrops,
    TradeAndShop,
    Other,
}

impl Category {
    /// Every category, in display order. Passing this set to the filter
    /// pipeline means "no category filter".
    pub const ALL: [Category; 18] = [
        Category::Weapons,
        Category::ArmourAndEquipment,
        Category::OresAndBars,
        Category::Logs,
        Category::Potions,
        Category::Runes,
        Category::Ammunition,
        Category::Farming,
        Category::CraftingMaterials,
        Category::FoodAndConsumables,
        Category::Tools,
        Category::ProductionSkills,
        Category::MagicAndTeleport,
        Category::ContainersAndBags,
        Category::QuestAndAchievementItems,
        Category::RewardsAndDrops,
        Category::TradeAndShop,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weapons => "Weapons",
            Category::ArmourAndEquipment => "Armour & Equipment",
            Category::OresAndBars => "Ores & Bars",
            Category::Logs => "Logs",
            Category::Potions => "Potions",
            Category::Runes => "Runes",
            Category::Ammunition => "Ammunition",
            Category::Farming => "Farming",
            Category::CraftingMaterials => "Crafting Materials",
            Category::FoodAndConsumables => "Food & Consumables",
            Category::Tools => "Tools",
            Category::ProductionSkills => "Production Skills",
            Category::MagicAndTeleport => "Magic & Teleport",
            Category::ContainersAndBags => "Containers & Bags",
            Category::QuestAndAchievementItems => "Quest & Achievement Items",
            Category::RewardsAndDrops => "Rewards & Drops",
            Category::TradeAndShop => "Trade & Shop",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One fully derived row: item metadata joined with its live quote,
/// profit computed against the current nature rune cost.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrichedItem {
    pub id: u32,
    pub name: String,
    pub members: bool,
    /// Always the negation of `members`; kept denormalized for filtering.
    pub f2p: bool,
    pub highalch: i64,
    pub buy: i64,
    pub sell: i64,
    /// `highalch - buy - reagent_cost`. Negative for losing flips.
    pub net_profit: i64,
    pub category: Category,
}

impl EnrichedItem {
    /// Builds a row from a joined item/quote pair. `f2p` and `net_profit`
    /// are derived here so they can never drift from their inputs.
    pub fn new(item: &Item, quote: &PriceQuote, reagent_cost: i64, category: Category) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            members: item.members,
            f2p: !item.members,
            highalch: item.highalch,
            buy: quote.buy,
            sell: quote.sell,
            net_profit: item.highalch - quote.buy - reagent_cost,
            category,
        }
    }
}
