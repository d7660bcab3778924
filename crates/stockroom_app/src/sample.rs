use stock::part::{Part, PartCode};

/// The parts a new stockroom session starts with, unless started empty.
pub fn sample_parts() -> Vec<Part> {
    vec![
        Part::new("Parafuso M8".to_string(), PartCode(1001), 500, "A1-01".to_string()),
        Part::new("Filtro de Óleo".to_string(), PartCode(2005), 120, "B3-10".to_string()),
        Part::new("Placa de Circuito".to_string(), PartCode(3100), 5, "C5-02".to_string()),
    ]
}
