use std::fmt;

/// A single dish or drink on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    /// Display price, always `$<dollars>.<cents>`.
    pub price: &'static str,
    pub description: &'static str,
    pub popular: bool,
}

const fn item(
    name: &'static str,
    price: &'static str,
    description: &'static str,
    popular: bool,
) -> MenuItem {
    MenuItem {
        name,
        price,
        description,
        popular,
    }
}

/// Menu groupings, in the order the switcher shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Chai,
    Cold,
    Snacks,
    Mains,
    Sides,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Chai,
        Category::Cold,
        Category::Snacks,
        Category::Mains,
        Category::Sides,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Chai => "chai",
            Category::Cold => "cold",
            Category::Snacks => "snacks",
            Category::Mains => "mains",
            Category::Sides => "sides",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Chai => "Hot & Cold Drinks",
            Category::Cold => "Shakes & Sodas",
            Category::Snacks => "Street Snacks",
            Category::Mains => "Maggi & Sandwiches",
            Category::Sides => "Fries & Roti",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Chai => "🍵",
            Category::Cold => "🥤",
            Category::Snacks => "🥟",
            Category::Mains => "🍝",
            Category::Sides => "🍟",
        }
    }

    pub fn items(self) -> &'static [MenuItem] {
        match self {
            Category::Chai => CHAI,
            Category::Cold => COLD,
            Category::Snacks => SNACKS,
            Category::Mains => MAINS,
            Category::Sides => SIDES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

const CHAI: &[MenuItem] = &[
    item("Chai Cutting", "$3.50", "Half cup of intense, perfectly brewed chai", true),
    item("Chai Full", "$5.50", "Full cup of our signature spiced chai", true),
    item("Coffee", "$4.50", "Rich Indian-style coffee", false),
    item("Bournvita", "$5.50", "Classic malted chocolate drink", false),
    item("Green Tea", "$3.50", "Light and refreshing green tea", false),
    item("Mango Lassi", "$7.50", "Creamy yogurt smoothie with fresh mango", true),
    item("Sweet Lassi", "$5.50", "Traditional sweetened yogurt drink", false),
    item("Salt Lassi", "$6.00", "Refreshing savory lassi", false),
];

const COLD: &[MenuItem] = &[
    item("Cold Coffee", "$7.50", "Iced coffee blend with cream", true),
    item("Iced Tea", "$4.50", "Chilled tea with refreshing flavors", false),
    item("Badam Milk", "$7.50", "Almond-infused milk drink", true),
    item("Milk Shake", "$7.50", "Creamy classic milkshake", false),
    item("Oreo Shake", "$10.50", "Loaded with Oreo cookie goodness", true),
    item("Kitkat Shake", "$10.50", "Crispy wafer chocolate shake", true),
    item("Ferrero Rocher Shake", "$10.50", "Premium hazelnut chocolate shake", true),
    item("Lemon Soda", "$5.50", "Fresh lemon with fizzy soda", false),
];

const SNACKS: &[MenuItem] = &[
    item("Vadapav", "$6.00", "Mumbai's famous spiced potato burger", true),
    item("Samosa Pav", "$6.00", "Crispy samosa served in a bun", true),
    item("Dabeli", "$6.00", "Sweet & spicy potato in a bun", true),
    item("Bun Maska", "$4.50", "Soft bun with butter - chai's best friend", true),
    item("Cheese Vadapav", "$8.50", "Vadapav loaded with melted cheese", true),
    item("Samosa", "$4.50", "Crispy pastry with spiced potato filling", false),
    item("Bread Pakoda", "$6.00", "Deep-fried bread fritters", false),
    item("Roasted Corn", "$8.50", "Spiced roasted corn on the cob", false),
];

const MAINS: &[MenuItem] = &[
    item("Plain Maggi", "$7.50", "Classic instant noodles done right", true),
    item("Cheese Maggi", "$10.50", "Loaded with melted cheese", true),
    item("Tandoori Maggi", "$10.50", "Spiced with tandoori flavors", true),
    item("Maggi Super Special", "$12.50", "Our ultimate loaded Maggi", true),
    item("Grilled Sandwich", "$4.50", "Classic grilled veg sandwich", false),
    item("Paneer Makhani Sandwich", "$8.50", "Rich paneer in makhani sauce", true),
    item("Tandoori Paneer Sandwich", "$9.50", "Spiced tandoori paneer filling", true),
    item("Chili Paneer Sandwich", "$9.50", "Indo-Chinese style paneer", false),
];

const SIDES: &[MenuItem] = &[
    item("Plain Fries", "$7.00", "Crispy golden French fries", true),
    item("Peri Peri Fries", "$9.00", "Spiced with peri peri seasoning", true),
    item("Cheese Fries", "$10.50", "Loaded with melted cheese", true),
    item("Manchurian Fries", "$9.00", "Indo-Chinese style fries", false),
    item("Roti", "$3.00", "Fresh wheat flatbread", false),
    item("Paratha", "$6.00", "Layered flaky flatbread", false),
    item("Butter Paratha", "$8.00", "Paratha with butter", true),
    item("Paneer Paratha", "$10.00", "Stuffed with spiced paneer", true),
];

/// Items shown under "Popular Items" in the footer.
pub const FOOTER_FAVOURITES: [&str; 4] = ["Chai Cutting", "Vadapav", "Maggi", "Samosa Pav"];
