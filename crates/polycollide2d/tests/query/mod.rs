mod detector_properties;
mod reference_pairs;
mod selector_report;
