pub mod detect_disease;
pub mod diagnose_plant;
pub mod identify_plant;
