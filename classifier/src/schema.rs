/// Attributes a chronic kidney disease model expects, in the positional order of its input.
pub const FEATURES: [&str; 24] = [
    "age",
    "blood_pressure",
    "specific_gravity",
    "albumin",
    "sugar",
    "red_blood_cells",
    "pus_cell",
    "pus_cell_clumps",
    "bacteria",
    "blood_glucose_random",
    "blood_urea",
    "serum_creatinine",
    "sodium",
    "potassium",
    "haemoglobin",
    "packed_cell_volume",
    "white_blood_cell_count",
    "red_blood_cell_count",
    "hypertension",
    "diabetes_mellitus",
    "coronary_artery_disease",
    "appetite",
    "peda_edema",
    "aanemia",
];

/// Returns the position of `feature` in [`FEATURES`].
pub fn position(feature: &str) -> Option<usize> {
    FEATURES.iter().position(|f| *f == feature)
}

/// Returns the name of the feature at `index`, or a positional placeholder outside the schema.
pub fn name(index: usize) -> String {
    FEATURES
        .get(index)
        .map(|f| f.to_string())
        .unwrap_or_else(|| format!("feature {index}"))
}

/// Returns a short entry hint shown next to the feature's input.
pub fn hint(feature: &str) -> &'static str {
    match feature {
        "age" => "years",
        "blood_pressure" => "mm/Hg",
        "specific_gravity" => "1.005 - 1.025",
        "albumin" | "sugar" => "0 - 5",
        "red_blood_cells" | "pus_cell" => "normal / abnormal",
        "pus_cell_clumps" | "bacteria" => "present / notpresent",
        "blood_glucose_random" => "mgs/dl",
        "blood_urea" => "mgs/dl",
        "serum_creatinine" => "mgs/dl",
        "sodium" | "potassium" => "mEq/L",
        "haemoglobin" => "gms",
        "packed_cell_volume" => "%",
        "white_blood_cell_count" => "cells/cumm",
        "red_blood_cell_count" => "millions/cmm",
        "hypertension" | "diabetes_mellitus" | "coronary_artery_disease" | "peda_edema"
        | "aanemia" => "yes / no",
        "appetite" => "good / poor",
        _ => "value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_schema_order() {
        assert_eq!(position("age"), Some(0));
        assert_eq!(position("hypertension"), Some(18));
        assert_eq!(position("aanemia"), Some(23));
        assert_eq!(position("weight"), None);
    }

    #[test]
    fn names_outside_schema_are_positional() {
        assert_eq!(name(1), "blood_pressure");
        assert_eq!(name(30), "feature 30");
    }
}
