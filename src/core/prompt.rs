use crate::core::season::Season;

/// Build the pairing prompt sent to the generation service
///
/// The template embeds the resolved season and location. Preference fields
/// collected by the form are not part of the template.
pub fn build_pairing_prompt(season: Season, location: &str) -> String {
    format!(
        "Suggest a wine and cheese pairing for {season} in {location}. \
         Answer in a single plain-text paragraph without any markup, lists or headings. \
         Give a brief rationale for the pairing covering wine style, region and seasonal cues, \
         and add serving notes if they are relevant. \
         If no suitable pairing can be determined for this season and location, \
         say so explicitly instead of guessing."
    )
}
