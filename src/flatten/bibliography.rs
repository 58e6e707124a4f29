//! Expansion of `<bib>` source abbreviations.

use log::warn;

/// Known bibliography abbreviations and the titles they stand for.
const BIBLIOGRAPHY: &[(&str, &str)] = &[
    ("Fund", "Fundamento de Esperanto"),
    ("FE", "Fundamenta Ekzercaro"),
    ("UV", "Universala Vortaro"),
    ("FK", "Fundamenta Krestomatio"),
    ("OA1", "Unua Oficiala Aldono al la Universala Vortaro"),
    ("OA2", "Dua Oficiala Aldono al la Universala Vortaro"),
    ("OA3", "Tria Oficiala Aldono al la Universala Vortaro"),
    ("PV", "Plena Vortaro de Esperanto"),
    ("PIV1", "Plena Ilustrita Vortaro de Esperanto"),
    ("PIV2", "La Nova Plena Ilustrita Vortaro de Esperanto"),
    ("BL", "La Bona Lingvo"),
    ("MT", "La Malnova Testamento"),
    ("NT", "La Nova Testamento"),
    ("Fab1", "Fabeloj de Andersen, volumo 1"),
    ("Fab2", "Fabeloj de Andersen, volumo 2"),
    ("Fab3", "Fabeloj de Andersen, volumo 3"),
    ("Fab4", "Fabeloj de Andersen, volumo 4"),
    ("Hamlet", "Hamleto, Reĝido de Danujo"),
    ("Rab", "La Rabistoj"),
    ("Marta", "Marta"),
    ("Revizoro", "La Revizoro"),
    ("Ifigenio", "Ifigenio en Taŭrido"),
    ("Monato", "Monato"),
    ("Lanti", "Leteroj de E. Lanti"),
];

/// Expand a bibliography abbreviation to its full title.
///
/// Unknown abbreviations are returned unchanged and logged.
pub fn expand_bibliography_abbreviation(abbreviation: &str) -> String {
    let key = abbreviation.trim();
    match BIBLIOGRAPHY.iter().find(|(short, _)| *short == key) {
        Some((_, title)) => (*title).to_string(),
        None => {
            warn!("Unknown bibliography abbreviation {key:?}");
            abbreviation.to_string()
        }
    }
}
