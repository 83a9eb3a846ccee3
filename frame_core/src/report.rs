//! # Design Report
//!
//! Gathers the planner's output into a [`DesignResult`]: final members, bent
//! layout, a material takeoff and the board-footage total. No decisions are
//! made here; everything is derived from the converged frame.
//!
//! Board feet per piece are nominal width × nominal depth × length / 12. Per
//! bent there are two posts (wall height), one beam (building width) and two
//! rafters (sloped half width). Wall plates are counted in 16 ft stock along
//! both eave walls and are not included in the board-foot total.

use serde::{Deserialize, Serialize};

use crate::calculations::{MemberClass, SizedMember};
use crate::errors::CalcResult;
use crate::input::{GeometryInput, LoadInput};
use crate::layout::{BentLayout, Convergence, PlannedFrame};
use crate::loads::RoofLoad;
use crate::materials::TimberSize;

/// Stock length used for wall plates (ft)
pub const PLATE_STOCK_LENGTH_FT: f64 = 16.0;

/// Pieces of one member class across the whole building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberTakeoff {
    pub class: MemberClass,
    /// Nominal section
    pub size: TimberSize,
    /// Length of one piece (ft)
    pub piece_length_ft: f64,
    /// Pieces across all bents
    pub count: u32,
    pub board_feet: f64,
}

/// Wall plates along both eave walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateTakeoff {
    pub pieces: u32,
    pub piece_length_ft: f64,
}

impl PlateTakeoff {
    /// Stock pieces needed to run a plate along both walls of a building
    pub fn for_length(length_ft: f64) -> Self {
        PlateTakeoff {
            pieces: (length_ft * 2.0 / PLATE_STOCK_LENGTH_FT).ceil() as u32,
            piece_length_ft: PLATE_STOCK_LENGTH_FT,
        }
    }
}

/// Complete outcome of a design run.
///
/// Contains no timestamps or generated identifiers, so identical inputs
/// serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Validated geometry
    pub geometry: GeometryInput,
    /// Validated snow load
    pub loads: LoadInput,
    /// Wall height plus roof rise (ft)
    pub ridge_height_ft: f64,
    /// Dead and governing snow load on the roof
    pub roof: RoofLoad,
    /// One sized member per class, in report order
    pub members: Vec<SizedMember>,
    /// Final bent layout
    pub layout: BentLayout,
    /// How the layout search ended
    pub convergence: Convergence,
    /// Bent counts evaluated by the layout search
    pub iterations: u32,
    /// Pieces per member class
    pub takeoff: Vec<MemberTakeoff>,
    /// Wall plate pieces
    pub wall_plates: PlateTakeoff,
    /// Posts, beams and rafters (board feet)
    pub total_board_feet: f64,
}

impl DesignResult {
    /// Sized member of a class
    pub fn member(&self, class: MemberClass) -> Option<&SizedMember> {
        self.members.iter().find(|m| m.class == class)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the result for a converged frame.
pub fn assemble(geometry: &GeometryInput, loads: &LoadInput, roof: RoofLoad, planned: PlannedFrame) -> DesignResult {
    let takeoff: Vec<MemberTakeoff> = planned
        .members
        .iter()
        .map(|member| {
            let piece_length_ft = member.class.span(geometry).0;
            let count = member.class.per_bent() * planned.layout.bent_count;
            MemberTakeoff {
                class: member.class,
                size: member.entry.size,
                piece_length_ft,
                count,
                board_feet: member.entry.size.board_feet_per_ft() * piece_length_ft * f64::from(count),
            }
        })
        .collect();
    let total_board_feet = takeoff.iter().map(|t| t.board_feet).sum();

    DesignResult {
        geometry: *geometry,
        loads: *loads,
        ridge_height_ft: geometry.ridge_height_ft(),
        roof,
        members: planned.members,
        layout: planned.layout,
        convergence: planned.convergence,
        iterations: planned.iterations,
        takeoff,
        wall_plates: PlateTakeoff::for_length(geometry.length_ft),
        total_board_feet,
    }
}

/// Render the plain-text design report.
pub fn render_text(result: &DesignResult) -> String {
    let g = &result.geometry;
    let roof = &result.roof;
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════════════════\n");
    out.push_str("  TIMBER FRAME STRUCTURE DESIGN REPORT\n");
    out.push_str("═══════════════════════════════════════════════════════════\n\n");

    out.push_str("BUILDING DIMENSIONS:\n");
    out.push_str(&format!("  Length:        {} ft\n", g.length_ft));
    out.push_str(&format!("  Width:         {} ft\n", g.width_ft));
    out.push_str(&format!("  Wall Height:   {} ft\n", g.wall_height_ft));
    out.push_str(&format!("  Ridge Height:  {:.1} ft\n", result.ridge_height_ft));
    out.push_str(&format!("  Roof Pitch:    {}/12\n\n", g.pitch));

    out.push_str("DESIGN LOADS:\n");
    out.push_str(&format!("  Snow Load:     {} psf\n", result.loads.snow_load_psf));
    out.push_str(&format!(
        "  Design Snow:   {:.1} psf ({})\n",
        roof.snow.governing_psf, roof.snow.case
    ));
    out.push_str(&format!("  Dead Load:     {:.1} psf\n", roof.dead_psf));
    out.push_str(&format!("  Total:         {:.1} psf (horizontal projection)\n\n", roof.total_psf));

    out.push_str("STRUCTURAL MEMBERS:\n");
    for member in &result.members {
        let u = &member.utilization;
        out.push_str(&format!(
            "  {:<14} {:<6} ({}\" × {}\")  {:.2} {} {}\n",
            format!("{}s:", member.class.display_name()),
            member.entry.size.display_name(),
            member.entry.width_in,
            member.entry.depth_in,
            u.governing(),
            u.governing_condition().to_lowercase(),
            status_icon(u.passes())
        ));
    }
    out.push('\n');

    out.push_str("FRAME LAYOUT:\n");
    out.push_str(&format!("  Number of Bents: {}\n", result.layout.bent_count));
    out.push_str(&format!("  Bent Spacing:    {:.1} ft on center\n", result.layout.spacing_ft));
    out.push_str(&format!("  Search:          {} after {} step(s)\n\n", result.convergence, result.iterations));

    out.push_str("MATERIAL REQUIREMENTS (Approximate):\n");
    for item in &result.takeoff {
        out.push_str(&format!(
            "  {:<14} {} pieces @ {:.1} ft  ({:.0} bf)\n",
            format!("{}s:", item.class.display_name()),
            item.count,
            item.piece_length_ft,
            item.board_feet
        ));
    }
    out.push_str(&format!(
        "  {:<14} {} pieces @ {} ft (both walls)\n",
        "Plates:", result.wall_plates.pieces, result.wall_plates.piece_length_ft
    ));
    out.push_str(&format!("  {:<14} {:.0} board feet\n\n", "Total:", result.total_board_feet));

    out.push_str("NOTE: This is a preliminary design. Consult a licensed structural\n");
    out.push_str("engineer for final design and local building code compliance.\n");
    out
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesignConfig;
    use crate::layout::plan;
    use crate::loads::roof_load;
    use crate::materials::LumberTable;

    fn golden() -> DesignResult {
        let config = DesignConfig::default();
        let table = LumberTable::new(&config.lumber);
        let geometry = GeometryInput {
            length_ft: 40.0,
            width_ft: 24.0,
            wall_height_ft: 10.0,
            pitch: 6.0,
        };
        let loads = LoadInput { snow_load_psf: 50.0 };
        let planned = plan(&geometry, &loads, &table, &config).unwrap();
        assemble(&geometry, &loads, roof_load(&geometry, &loads, &config), planned)
    }

    #[test]
    fn test_takeoff_counts_and_board_feet() {
        let result = golden();
        let by_class = |class: MemberClass| result.takeoff.iter().find(|t| t.class == class).unwrap();

        let posts = by_class(MemberClass::Post);
        assert_eq!(posts.count, 14);
        assert!((posts.board_feet - 420.0).abs() < 1e-9);

        let beams = by_class(MemberClass::Beam);
        assert_eq!(beams.count, 7);
        assert!((beams.board_feet - 1960.0).abs() < 1e-9);

        let rafters = by_class(MemberClass::Rafter);
        assert_eq!(rafters.count, 14);
        assert!((rafters.piece_length_ft - 13.4164).abs() < 0.0001);
        assert!((rafters.board_feet - 1252.198).abs() < 0.001);

        assert!((result.total_board_feet - 3632.198).abs() < 0.001);
    }

    #[test]
    fn test_ridge_and_plates() {
        let result = golden();
        assert_eq!(result.ridge_height_ft, 16.0);
        assert_eq!(result.wall_plates.pieces, 5);
        assert_eq!(result.wall_plates.piece_length_ft, 16.0);
        assert_eq!(PlateTakeoff::for_length(48.0).pieces, 6);
    }

    #[test]
    fn test_render_text_sections() {
        let text = render_text(&golden());
        assert!(text.contains("Ridge Height:  16.0 ft"));
        assert!(text.contains("Roof Pitch:    6/12"));
        assert!(text.contains("Beams:"));
        assert!(text.contains("10x14"));
        assert!(text.contains("Number of Bents: 7"));
        assert!(text.contains("Bent Spacing:    6.7 ft on center"));
        assert!(text.contains("5 pieces @ 16 ft (both walls)"));
        assert!(text.contains("3632 board feet"));
        assert!(text.contains("licensed structural"));
        assert!(!text.contains("[FAIL]"));
    }

    #[test]
    fn test_json_output() {
        let result = golden();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"total_board_feet\""));
        assert!(json.contains("\"10x14\""));
        let back: DesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.layout.bent_count, 7);
    }
}
