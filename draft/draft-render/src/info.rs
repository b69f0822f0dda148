//! Drawing metadata for the title block and notes panel.

use serde::{Deserialize, Serialize};

/// Dimensional tolerance strings quoted in the general notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Linear tolerance, e.g. `±0.1`.
    pub linear: String,
    /// Angular tolerance, e.g. `±0.5°`.
    pub angular: String,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            linear: "±0.1".to_string(),
            angular: "±0.5°".to_string(),
        }
    }
}

/// Metadata printed on the drawing sheet.
///
/// Every field has a placeholder default so a partial override (say, a JSON
/// file with only `part_name` and `material`) still yields a complete title
/// block.
///
/// # Example
///
/// ```
/// use draft_render::DrawingInfo;
///
/// let info = DrawingInfo {
///     part_name: "BALL BEARING".to_string(),
///     part_number: "BB-6000-2RS".to_string(),
///     ..DrawingInfo::default()
/// };
/// assert_eq!(info.units, "mm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingInfo {
    /// Part name.
    pub part_name: String,
    /// Part number.
    pub part_number: String,
    /// Material callout.
    pub material: String,
    /// Drawing scale, e.g. `1:1`.
    pub scale: String,
    /// Projection method, e.g. `THIRD ANGLE`.
    pub projection_method: String,
    /// Drawing number.
    pub drawing_number: String,
    /// Revision letter.
    pub revision: String,
    /// Drafter name.
    pub drawn_by: String,
    /// Checker name.
    pub checked_by: String,
    /// Approver name.
    pub approved_by: String,
    /// Issue date, `YYYY-MM-DD`.
    pub date: String,
    /// Company name header.
    pub company: String,
    /// Drawing title header.
    pub title: String,
    /// Unit system, e.g. `mm`.
    pub units: String,
    /// Surface finish callout.
    pub surface_finish: String,
    /// Tolerance strings for the notes panel.
    pub tolerances: Tolerances,
}

impl Default for DrawingInfo {
    fn default() -> Self {
        Self {
            part_name: "PART NAME".to_string(),
            part_number: "PN-000-000".to_string(),
            material: "MATERIAL TBD".to_string(),
            scale: "1:1".to_string(),
            projection_method: "THIRD ANGLE".to_string(),
            drawing_number: "DWG-001".to_string(),
            revision: "A".to_string(),
            drawn_by: "ENGINEER".to_string(),
            checked_by: "CHECKER".to_string(),
            approved_by: "APPROVER".to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            company: "COMPANY NAME".to_string(),
            title: "ENGINEERING DRAWING".to_string(),
            units: "mm".to_string(),
            surface_finish: "3.2 μm".to_string(),
            tolerances: Tolerances::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_fields() {
        let info = DrawingInfo::default();
        assert_eq!(info.part_name, "PART NAME");
        assert_eq!(info.part_number, "PN-000-000");
        assert_eq!(info.scale, "1:1");
        assert_eq!(info.units, "mm");
        assert_eq!(info.tolerances.linear, "±0.1");
        // Date looks like YYYY-MM-DD.
        assert_eq!(info.date.len(), 10);
        assert_eq!(&info.date[4..5], "-");
    }

    #[test]
    fn partial_json_override_keeps_defaults() {
        let json = r#"{ "part_name": "BRACKET", "material": "6061-T6" }"#;
        let info: DrawingInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.part_name, "BRACKET");
        assert_eq!(info.material, "6061-T6");
        assert_eq!(info.part_number, "PN-000-000");
        assert_eq!(info.projection_method, "THIRD ANGLE");
    }
}
