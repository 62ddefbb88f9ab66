use once_cell::sync::Lazy;
use serde::Serialize;

/// Entry of the category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category {
            label: "Beach",
            icon: "TbBeach",
            description: "This property is close to the beach!",
        },
        Category {
            label: "Windmills",
            icon: "GiWindmill",
            description: "This property has windmills!",
        },
        Category {
            label: "Modern",
            icon: "MdOutlineVilla",
            description: "This property is modern!",
        },
        Category {
            label: "Countryside",
            icon: "TbMountain",
            description: "This property is in the countryside!",
        },
        Category {
            label: "Pools",
            icon: "TbPool",
            description: "This property has a pool!",
        },
        Category {
            label: "Islands",
            icon: "GiIsland",
            description: "This property is on an island!",
        },
        Category {
            label: "Lake",
            icon: "GiBoatFishing",
            description: "This property is close to a lake!",
        },
        Category {
            label: "Skiing",
            icon: "FaSkiing",
            description: "This property has skiing activities!",
        },
        Category {
            label: "Castles",
            icon: "GiCastle",
            description: "This property is in a castle!",
        },
        Category {
            label: "Caves",
            icon: "GiCaveEntrance",
            description: "This property is in a spooky cave!",
        },
        Category {
            label: "Camping",
            icon: "GiForestCamp",
            description: "This property offers camping activities!",
        },
        Category {
            label: "Arctic",
            icon: "BsSnow",
            description: "This property is in an arctic environment!",
        },
        Category {
            label: "Desert",
            icon: "GiCactus",
            description: "This property is in the desert!",
        },
        Category {
            label: "Barns",
            icon: "GiBarn",
            description: "This property is in a barn!",
        },
        Category {
            label: "Lux",
            icon: "IoDiamond",
            description: "This property is brand new and luxurious!",
        },
    ]
});

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Case-insensitive lookup returning the canonical entry.
pub fn find_category(label: &str) -> Option<&'static Category> {
    let needle = label.trim();
    categories()
        .iter()
        .find(|category| category.label.eq_ignore_ascii_case(needle))
}
