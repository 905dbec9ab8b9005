//! Display metadata for planets and houses.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub element: &'static str,
    pub nature: &'static str,
    pub gender: &'static str,
    pub rules: &'static str,
    pub keywords: [&'static str; 5],
    pub body_parts: &'static str,
    pub day: &'static str,
}

pub const PLANET_PROFILES: &[PlanetProfile] = &[
    PlanetProfile {
        name: "Sun",
        icon: "☉",
        label: "Self",
        color: "#fbbf24",
        description: "Identity, purpose, leadership, vitality, father, authority",
        element: "Fire",
        nature: "Malefic",
        gender: "Male",
        rules: "Leo",
        keywords: ["Soul", "Ego", "Power", "Government", "Father"],
        body_parts: "Heart, Spine, Eyes",
        day: "Sunday",
    },
    PlanetProfile {
        name: "Moon",
        icon: "☽",
        label: "Mind",
        color: "#e2e8f0",
        description: "Emotions, mother, comfort, intuition, memory, public",
        element: "Water",
        nature: "Benefic",
        gender: "Female",
        rules: "Cancer",
        keywords: ["Mind", "Mother", "Emotions", "Public", "Nurturing"],
        body_parts: "Brain, Fluids, Chest",
        day: "Monday",
    },
    PlanetProfile {
        name: "Mars",
        icon: "♂",
        label: "Drive",
        color: "#f87171",
        description: "Courage, action, energy, siblings, competition, property",
        element: "Fire",
        nature: "Malefic",
        gender: "Male",
        rules: "Aries & Scorpio",
        keywords: ["Energy", "Courage", "Brothers", "Land", "Surgery"],
        body_parts: "Blood, Muscles, Head",
        day: "Tuesday",
    },
    PlanetProfile {
        name: "Mercury",
        icon: "☿",
        label: "Intellect",
        color: "#4ade80",
        description: "Communication, learning, trade, writing, calculation",
        element: "Earth",
        nature: "Neutral",
        gender: "Neutral",
        rules: "Gemini & Virgo",
        keywords: ["Speech", "Logic", "Trade", "Education", "Friends"],
        body_parts: "Nervous System, Skin, Lungs",
        day: "Wednesday",
    },
    PlanetProfile {
        name: "Jupiter",
        icon: "♃",
        label: "Growth",
        color: "#fde047",
        description: "Wisdom, expansion, luck, teachers, children, dharma",
        element: "Ether",
        nature: "Benefic",
        gender: "Male",
        rules: "Sagittarius & Pisces",
        keywords: ["Wisdom", "Fortune", "Guru", "Children", "Dharma"],
        body_parts: "Liver, Fat, Thighs",
        day: "Thursday",
    },
    PlanetProfile {
        name: "Venus",
        icon: "♀",
        label: "Love",
        color: "#f9a8d4",
        description: "Relationships, beauty, art, luxury, spouse, pleasure",
        element: "Water",
        nature: "Benefic",
        gender: "Female",
        rules: "Taurus & Libra",
        keywords: ["Love", "Beauty", "Marriage", "Art", "Luxury"],
        body_parts: "Reproductive, Face, Kidneys",
        day: "Friday",
    },
    PlanetProfile {
        name: "Saturn",
        icon: "♄",
        label: "Discipline",
        color: "#93c5fd",
        description: "Structure, karma, delays, service, longevity, renunciation",
        element: "Air",
        nature: "Malefic",
        gender: "Neutral",
        rules: "Capricorn & Aquarius",
        keywords: ["Karma", "Discipline", "Service", "Delays", "Longevity"],
        body_parts: "Bones, Joints, Teeth",
        day: "Saturday",
    },
    PlanetProfile {
        name: "Rahu",
        icon: "☊",
        label: "Obsession",
        color: "#c084fc",
        description: "Desires, illusions, foreign, unconventional, amplification",
        element: "Air",
        nature: "Malefic",
        gender: "Neutral",
        rules: "Aquarius",
        keywords: ["Desire", "Illusion", "Foreign", "Obsession", "Amplify"],
        body_parts: "Skin disorders, Poisons",
        day: "Saturday",
    },
    PlanetProfile {
        name: "Ketu",
        icon: "☋",
        label: "Liberation",
        color: "#fb923c",
        description: "Spirituality, detachment, past karma, moksha, intuition",
        element: "Fire",
        nature: "Malefic",
        gender: "Neutral",
        rules: "Scorpio",
        keywords: ["Moksha", "Detachment", "Past Life", "Intuition", "Spiritual"],
        body_parts: "Spine, Nervous system",
        day: "Tuesday",
    },
    PlanetProfile {
        name: "Mandi",
        icon: "Mn",
        label: "Obstacles",
        color: "#94a3b8",
        description: "Son of Saturn, obstacles, delays, suffering, karmic debt",
        element: "Earth",
        nature: "Malefic",
        gender: "Neutral",
        rules: "None",
        keywords: ["Obstacles", "Delays", "Suffering", "Karma", "Restriction"],
        body_parts: "Chronic illness",
        day: "Saturday",
    },
    PlanetProfile {
        name: "Gulika",
        icon: "Gk",
        label: "Poison",
        color: "#64748b",
        description: "Son of Saturn, poison, death-like experiences, transformation",
        element: "Earth",
        nature: "Malefic",
        gender: "Neutral",
        rules: "None",
        keywords: ["Poison", "Death", "Transform", "Hidden", "Intense"],
        body_parts: "Toxins, Poisons",
        day: "Saturday",
    },
];

pub fn planet_profile(name: &str) -> Option<&'static PlanetProfile> {
    PLANET_PROFILES.iter().find(|p| p.name == name)
}

/// Traditional grouping of a house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HouseCategory {
    Kendra,
    Trikona,
    Upachaya,
    Dusthana,
    Maraka,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseProfile {
    pub house: u8,
    pub label: &'static str,
    pub short_label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub significator: &'static str,
    pub body_part: &'static str,
    pub category: HouseCategory,
    pub keywords: [&'static str; 4],
}

pub const HOUSE_PROFILES: [HouseProfile; 12] = [
    HouseProfile {
        house: 1,
        label: "Ascendant",
        short_label: "Self",
        color: "#f87171",
        description: "Identity, body, personality, health, new beginnings",
        significator: "Sun",
        body_part: "Head",
        category: HouseCategory::Kendra,
        keywords: ["Self", "Body", "Appearance", "Character"],
    },
    HouseProfile {
        house: 2,
        label: "Wealth",
        short_label: "Wealth",
        color: "#fbbf24",
        description: "Money, family, speech, food, early education",
        significator: "Jupiter",
        body_part: "Face",
        category: HouseCategory::Maraka,
        keywords: ["Money", "Speech", "Family", "Food"],
    },
    HouseProfile {
        house: 3,
        label: "Siblings",
        short_label: "Effort",
        color: "#fde047",
        description: "Courage, siblings, short travel, communication, skills",
        significator: "Mars",
        body_part: "Arms",
        category: HouseCategory::Upachaya,
        keywords: ["Courage", "Siblings", "Skills", "Hobbies"],
    },
    HouseProfile {
        house: 4,
        label: "Home",
        short_label: "Home",
        color: "#4ade80",
        description: "Mother, property, vehicles, comfort, education, happiness",
        significator: "Moon",
        body_part: "Chest",
        category: HouseCategory::Kendra,
        keywords: ["Mother", "Home", "Property", "Peace"],
    },
    HouseProfile {
        house: 5,
        label: "Children",
        short_label: "Create",
        color: "#22d3ee",
        description: "Intelligence, children, romance, speculation, past merit",
        significator: "Jupiter",
        body_part: "Stomach",
        category: HouseCategory::Trikona,
        keywords: ["Children", "Romance", "Creativity", "Luck"],
    },
    HouseProfile {
        house: 6,
        label: "Enemies",
        short_label: "Health",
        color: "#06b6d4",
        description: "Health, enemies, debts, service, pets, daily work",
        significator: "Mars",
        body_part: "Intestines",
        category: HouseCategory::Dusthana,
        keywords: ["Health", "Service", "Enemies", "Debts"],
    },
    HouseProfile {
        house: 7,
        label: "Partnership",
        short_label: "Partner",
        color: "#93c5fd",
        description: "Marriage, business partners, public, foreign travel",
        significator: "Venus",
        body_part: "Lower Back",
        category: HouseCategory::Kendra,
        keywords: ["Marriage", "Partner", "Business", "Public"],
    },
    HouseProfile {
        house: 8,
        label: "Transformation",
        short_label: "Change",
        color: "#c084fc",
        description: "Death, inheritance, secrets, research, transformation",
        significator: "Saturn",
        body_part: "Reproductive",
        category: HouseCategory::Dusthana,
        keywords: ["Longevity", "Secrets", "Occult", "Inheritance"],
    },
    HouseProfile {
        house: 9,
        label: "Fortune",
        short_label: "Dharma",
        color: "#e9d5ff",
        description: "Luck, father, guru, higher learning, long travel, dharma",
        significator: "Jupiter",
        body_part: "Thighs",
        category: HouseCategory::Trikona,
        keywords: ["Luck", "Father", "Guru", "Dharma"],
    },
    HouseProfile {
        house: 10,
        label: "Career",
        short_label: "Career",
        color: "#f9a8d4",
        description: "Profession, status, authority, karma, achievements",
        significator: "Saturn",
        body_part: "Knees",
        category: HouseCategory::Kendra,
        keywords: ["Career", "Status", "Fame", "Authority"],
    },
    HouseProfile {
        house: 11,
        label: "Gains",
        short_label: "Gains",
        color: "#fda4af",
        description: "Income, gains, friends, elder siblings, aspirations",
        significator: "Jupiter",
        body_part: "Calves",
        category: HouseCategory::Upachaya,
        keywords: ["Income", "Friends", "Goals", "Gains"],
    },
    HouseProfile {
        house: 12,
        label: "Liberation",
        short_label: "Moksha",
        color: "#a5b4fc",
        description: "Losses, expenses, foreign lands, spirituality, moksha",
        significator: "Saturn",
        body_part: "Feet",
        category: HouseCategory::Dusthana,
        keywords: ["Expenses", "Foreign", "Spirituality", "Sleep"],
    },
];

/// Profile for a house number 1-12.
pub fn house_profile(house: u8) -> Option<&'static HouseProfile> {
    HOUSE_PROFILES.get(usize::from(house).checked_sub(1)?)
}
