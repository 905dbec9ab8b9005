use crate::strength::bhava_bala::HouseStrength;
use crate::strength::shad_bala::PlanetStrength;
use serde::Serialize;

/// A life theme scored from its ruling planets and houses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeArea {
    pub key: &'static str,
    pub label: &'static str,
    pub planets: &'static [&'static str],
    pub houses: &'static [u8],
    pub color: &'static str,
    pub description: &'static str,
}

pub const LIFE_AREAS: [LifeArea; 8] = [
    LifeArea {
        key: "identity",
        label: "Identity",
        planets: &["Sun"],
        houses: &[1],
        color: "#f97316",
        description: "Your core self, vitality, and life direction",
    },
    LifeArea {
        key: "emotions",
        label: "Emotions",
        planets: &["Moon"],
        houses: &[4],
        color: "#a3a3a3",
        description: "Emotional nature, comfort, and inner peace",
    },
    LifeArea {
        key: "action",
        label: "Action",
        planets: &["Mars"],
        houses: &[3, 6],
        color: "#ef4444",
        description: "Drive, courage, and ability to overcome",
    },
    LifeArea {
        key: "intellect",
        label: "Intellect",
        planets: &["Mercury"],
        houses: &[3, 5],
        color: "#22c55e",
        description: "Communication, learning, and analysis",
    },
    LifeArea {
        key: "growth",
        label: "Growth",
        planets: &["Jupiter"],
        houses: &[9, 5],
        color: "#eab308",
        description: "Wisdom, luck, expansion, and blessings",
    },
    LifeArea {
        key: "relationships",
        label: "Relationships",
        planets: &["Venus"],
        houses: &[7],
        color: "#ec4899",
        description: "Love, partnerships, and harmony",
    },
    LifeArea {
        key: "career",
        label: "Career",
        planets: &["Saturn", "Sun"],
        houses: &[10],
        color: "#3b82f6",
        description: "Professional success and status",
    },
    LifeArea {
        key: "wealth",
        label: "Wealth",
        planets: &["Jupiter", "Venus"],
        houses: &[2, 11],
        color: "#14b8a6",
        description: "Financial prosperity and gains",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeAreaScore {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    /// Mean strength ratio of the area's planets
    pub planet_score: f64,
    /// Mean strength ratio of the area's houses, if house data exists
    pub house_score: Option<f64>,
    /// Combined score, 1.0 = full strength
    pub score: f64,
}

impl LifeArea {
    /// Score this area. Without house data the planet mean stands alone.
    pub fn score(&self, planets: &[PlanetStrength], houses: Option<&[HouseStrength]>) -> LifeAreaScore {
        let planet_score = mean(self.planets.iter().map(|name| {
            planets
                .iter()
                .find(|p| p.planet == *name)
                .map(|p| p.ratio)
                .unwrap_or(0.0)
        }));

        let house_score = houses.map(|houses| {
            mean(self.houses.iter().map(|house| {
                houses
                    .iter()
                    .find(|h| h.house == *house)
                    .map(|h| h.ratio)
                    .unwrap_or(0.0)
            }))
        });

        let score = match house_score {
            Some(house_score) => (planet_score + house_score) / 2.0,
            None => planet_score,
        };

        LifeAreaScore {
            key: self.key,
            label: self.label,
            color: self.color,
            description: self.description,
            planet_score,
            house_score,
            score,
        }
    }
}

/// Scores for every life area in table order.
pub fn life_area_scores(planets: &[PlanetStrength], houses: Option<&[HouseStrength]>) -> Vec<LifeAreaScore> {
    LIFE_AREAS.iter().map(|area| area.score(planets, houses)).collect()
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
