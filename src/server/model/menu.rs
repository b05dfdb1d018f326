use serde::{Deserialize, Serialize};

/// A single priced menu entry. Names are unique within a category and
/// act as the selection keys on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

/// The fixed category keys. The catalog is code-defined; changing the
/// menu means redeploying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuCategory {
    Snacks,
    Starters,
    SundayRoasts,
    Mains,
    Sides,
    Desserts,
    KidsMains,
    KidsRoasts,
    KidsDesserts,
}

impl MenuCategory {
    pub fn key(&self) -> &'static str {
        match self {
            MenuCategory::Snacks => "snacks",
            MenuCategory::Starters => "starters",
            MenuCategory::SundayRoasts => "sundayRoasts",
            MenuCategory::Mains => "mains",
            MenuCategory::Sides => "sides",
            MenuCategory::Desserts => "desserts",
            MenuCategory::KidsMains => "kidsMains",
            MenuCategory::KidsRoasts => "kidsRoasts",
            MenuCategory::KidsDesserts => "kidsDesserts",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuCatalog {
    pub snacks: Vec<MenuItem>,
    pub starters: Vec<MenuItem>,
    pub sunday_roasts: Vec<MenuItem>,
    pub mains: Vec<MenuItem>,
    pub sides: Vec<MenuItem>,
    pub desserts: Vec<MenuItem>,
    pub kids_mains: Vec<MenuItem>,
    pub kids_roasts: Vec<MenuItem>,
    pub kids_desserts: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn category(&self, category: MenuCategory) -> &[MenuItem] {
        match category {
            MenuCategory::Snacks => &self.snacks,
            MenuCategory::Starters => &self.starters,
            MenuCategory::SundayRoasts => &self.sunday_roasts,
            MenuCategory::Mains => &self.mains,
            MenuCategory::Sides => &self.sides,
            MenuCategory::Desserts => &self.desserts,
            MenuCategory::KidsMains => &self.kids_mains,
            MenuCategory::KidsRoasts => &self.kids_roasts,
            MenuCategory::KidsDesserts => &self.kids_desserts,
        }
    }

    /// Price of a named item, `None` if the category has no such entry.
    pub fn lookup(&self, category: MenuCategory, item_name: &str) -> Option<f64> {
        self.category(category)
            .iter()
            .find(|item| item.name == item_name)
            .map(|item| item.price)
    }

    /// Price of a named item, zero for unknown names. Callers that want
    /// to distinguish "unknown" from "free" use [`lookup`](Self::lookup).
    pub fn find_price(&self, category: MenuCategory, item_name: &str) -> f64 {
        self.lookup(category, item_name).unwrap_or(0.0)
    }

    /// The Sunday menu served at the event.
    pub fn sunday_menu() -> Self {
        Self {
            snacks: vec![
                MenuItem::new("Sourdough, crisp bread, salted butter", 4.50),
                MenuItem::new("Whitebait", 8.50),
                MenuItem::new("Scotch egg", 7.50),
                MenuItem::new("Cod cheeks, curry sauce", 9.50),
                MenuItem::new("Rock oysters", 3.50),
            ],
            starters: vec![
                MenuItem::new("Roast celeriac soup, woodland mushroom toastie", 9.50),
                MenuItem::new("Beetroots, pickled pear, horseradish curds, hazelnuts", 10.50),
                MenuItem::new("Baked camembert for two", 16.00),
                MenuItem::new("Chicken livers on toast", 10.50),
                MenuItem::new("Pork, pistachio and cranberry terrine, Waldorf slaw", 11.50),
                MenuItem::new("Chopped beef, horseradish", 11.50),
                MenuItem::new("Mackerel rillette, rye crumpet, pickles", 10.50),
                MenuItem::new("Monkfish scampi, gribiche", 12.50),
            ],
            sunday_roasts: vec![
                MenuItem::new("Roast sirloin of native breed beef, horseradish", 24.50),
                MenuItem::new("Roast loin of pork, apple sauce, crackling", 22.50),
                MenuItem::new("Grain fed chicken, bread sauce", 21.50),
                MenuItem::new("O'Brien's nut roast, mushroom gravy", 20.50),
            ],
            mains: vec![
                MenuItem::new("Caramelised cauliflower risotto, smoked almonds, 'feta'", 19.50),
                MenuItem::new("Chestnut and leek homity pie, greens, smoked cheddar sauce", 18.50),
                MenuItem::new("Sea trout, mussels, fennel, sea herbs", 24.50),
                MenuItem::new("Plaice, samphire, brown butter", 22.50),
                MenuItem::new("Chicken, leek and tarragon pie for two", 38.00),
            ],
            sides: vec![
                MenuItem::new("Sprout tops, bacon and chestnuts", 5.50),
                MenuItem::new("Honey roast parsnips", 5.00),
                MenuItem::new("Garlic and parmesan mash", 5.50),
                MenuItem::new("Pub chips", 5.00),
                MenuItem::new("Butterhead lettuce, shallots, lemon", 5.00),
            ],
            desserts: vec![
                MenuItem::new("Clementine and ginger cheesecake, pistachio", 9.50),
                MenuItem::new("Sticky toffee pudding, clotted cream", 9.50),
                MenuItem::new("Chocolate mousse, salted caramel, honeycomb", 9.50),
                MenuItem::new("Quickes Mature Cheddar, Eccles cake", 9.50),
                MenuItem::new("Apple tarte tatin for two, ice cream, custard", 16.00),
            ],
            kids_mains: vec![
                MenuItem::new("Fish fingers, chips, peas", 8.50),
                MenuItem::new("Grilled chicken fillets, chips, peas", 9.50),
                MenuItem::new("Sausages, mashed potatoes, peas", 8.50),
                MenuItem::new("Rigatoni pasta, pesto, Parmesan", 8.50),
                MenuItem::new("Cheeseburger, chips, salad", 9.50),
            ],
            kids_roasts: vec![
                MenuItem::new("Roast sirloin of native breed beef, horseradish", 14.50),
                MenuItem::new("Roast loin of pork, apple sauce, crackling", 13.50),
                MenuItem::new("Grain fed chicken, bread sauce", 12.50),
                MenuItem::new("O'Brien's nut roast, mushroom gravy", 12.50),
            ],
            kids_desserts: vec![
                MenuItem::new("Chocolate brownie, ice cream", 5.50),
                MenuItem::new("Sticky toffee pudding", 5.50),
                MenuItem::new("Ice cream (1 scoop)", 3.50),
                MenuItem::new("Ice cream (2 scoops)", 5.00),
                MenuItem::new("Ice cream (3 scoops)", 6.50),
            ],
        }
    }
}
