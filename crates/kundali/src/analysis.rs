//! Everything derived from one response, bundled for display or export.

use crate::aspects::{bodies_from_response, compute_aspects, Aspect, AspectSummary};
use crate::chart::{layout_diamond, ChartGrid, ChartKind, HouseCellContent, HouseProjection, HouseProjector};
use crate::dasha::DashaTimeline;
use crate::payload::KundaliResponse;
use crate::rendering::{
    house_dataset, life_area_dataset, planet_dataset, polygon_points, ChartSpec, DiamondSpecGenerator, Point,
    RadarDatum, RadarGeometry, RadarPoint, RadarSpecGenerator,
};
use crate::settings::KundaliSettings;
use crate::strength::{
    house_strengths, life_area_scores, planet_strengths, HouseStrength, LifeAreaScore, PlanetStrength,
    StrengthInsights,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One divisional chart, projected and laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub kind: ChartKind,
    pub ascendant: usize,
    pub grid: ChartGrid,
    pub houses: Vec<HouseProjection>,
    pub cells: Vec<HouseCellContent>,
}

impl ChartView {
    pub fn build(response: &KundaliResponse, kind: ChartKind, settings: &KundaliSettings) -> Self {
        let projector = HouseProjector::from_response(response, kind);
        let cells = layout_diamond(
            &projector,
            &response.planets,
            kind,
            settings.diamond.ring_radius(),
        );
        Self {
            kind,
            ascendant: projector.ascendant(),
            grid: projector.grid().clone(),
            houses: projector.houses(),
            cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarView {
    pub title: String,
    pub geometry: RadarGeometry,
    pub points: Vec<RadarPoint>,
    /// Data polygon as an SVG `points` attribute.
    pub polygon: String,
}

impl RadarView {
    fn new(title: &str, size: f64, settings: &KundaliSettings, data: &[RadarDatum]) -> Self {
        let geometry = RadarGeometry::with_options(size, settings.radar.levels, settings.radar.label_offset);
        let points = geometry.project(data);
        let vertices: Vec<Point> = points.iter().map(|p| p.position).collect();
        Self {
            title: title.to_string(),
            polygon: polygon_points(&vertices),
            points,
            geometry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KundaliAnalysis {
    pub rasi: ChartView,
    pub navamsa: ChartView,
    pub aspects: Vec<Aspect>,
    pub aspect_summary: AspectSummary,
    pub planet_strengths: Vec<PlanetStrength>,
    /// `None` when the response carried no house data.
    pub house_strengths: Option<Vec<HouseStrength>>,
    pub life_areas: Vec<LifeAreaScore>,
    pub insights: StrengthInsights,
    pub planet_radar: RadarView,
    pub house_radar: Option<RadarView>,
    pub life_area_radar: RadarView,
    pub dasha: Option<DashaTimeline>,
}

impl KundaliAnalysis {
    pub fn from_response(response: &KundaliResponse, now: DateTime<Utc>, settings: &KundaliSettings) -> Self {
        let aspects = compute_aspects(&bodies_from_response(response));
        let aspect_summary = AspectSummary::from_aspects(&aspects);

        let planets = planet_strengths(&response.shad_bala);
        let houses = house_strengths(response.bhava_bala.as_ref());
        let life_areas = life_area_scores(&planets, houses.as_deref());
        let insights = StrengthInsights::compute(&planets, houses.as_deref());

        let radar = &settings.radar;
        let planet_radar = RadarView::new("Planet Strength", radar.planet_size, settings, &planet_dataset(&planets));
        let house_radar = houses
            .as_deref()
            .map(|h| RadarView::new("House Strength", radar.house_size, settings, &house_dataset(h)));
        let life_area_radar = RadarView::new(
            "Life Areas",
            radar.life_area_size,
            settings,
            &life_area_dataset(&life_areas),
        );

        log::debug!(
            "analysis: {} aspects, {} planet strengths, house data {}",
            aspects.len(),
            planets.len(),
            if houses.is_some() { "present" } else { "absent" }
        );

        Self {
            rasi: ChartView::build(response, ChartKind::Rasi, settings),
            navamsa: ChartView::build(response, ChartKind::Navamsa, settings),
            aspects,
            aspect_summary,
            planet_strengths: planets,
            house_strengths: houses,
            life_areas,
            insights,
            planet_radar,
            house_radar,
            life_area_radar,
            dasha: response.dasha.as_ref().map(|info| DashaTimeline::resolve(info, now)),
        }
    }

    pub fn chart(&self, kind: ChartKind) -> &ChartView {
        match kind {
            ChartKind::Rasi => &self.rasi,
            ChartKind::Navamsa => &self.navamsa,
        }
    }

    /// Shape specs for every chart: both diamonds, then the radars present.
    pub fn chart_specs(&self, settings: &KundaliSettings) -> Vec<ChartSpec> {
        let diamond = DiamondSpecGenerator::new();
        let radar = RadarSpecGenerator::new();
        let mut specs: Vec<ChartSpec> = ChartKind::ALL
            .iter()
            .map(|kind| {
                let view = self.chart(*kind);
                diamond.generate(kind.label(), &view.cells, settings.diamond.view_box)
            })
            .collect();
        let radars = std::iter::once(&self.planet_radar)
            .chain(self.house_radar.as_ref())
            .chain(std::iter::once(&self.life_area_radar));
        specs.extend(radars.map(|view| radar.generate(&view.title, &view.geometry, &view.points)));
        specs
    }
}
