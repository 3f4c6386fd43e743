use crate::model::Role;

/// Shown in place of a lead when nobody has been hired
pub const NO_LEAD_TEXT: &str = "no actor has been hired for this role";

/// Shown in place of an understudy when fewer than two actors are hired
pub const NO_UNDERSTUDY_TEXT: &str = "no actor has been hired for understudy for this role";

/// The lead's actor name, or `NO_LEAD_TEXT`
pub fn lead_text(role: &Role) -> &str {
    role.lead()
        .map(|a| a.actor.as_str())
        .unwrap_or(NO_LEAD_TEXT)
}

/// The understudy's actor name, or `NO_UNDERSTUDY_TEXT`
pub fn understudy_text(role: &Role) -> &str {
    role.understudy()
        .map(|a| a.actor.as_str())
        .unwrap_or(NO_UNDERSTUDY_TEXT)
}

/// Render a Role as a plain-text report
///
/// One line each for the character name, actors, locations, lead and
/// understudy. Actor and location lists use debug quoting so stray
/// whitespace in stored names stays visible.
pub fn render_role(role: &Role) -> String {
    let mut output = String::new();

    output.push_str(&format!("Role: {}\n", role.character_name));
    output.push_str(&format!("Actors: {:?}\n", role.actors()));
    output.push_str(&format!("Locations: {:?}\n", role.locations()));
    output.push_str(&format!("Lead: {}\n", lead_text(role)));
    output.push_str(&format!("Understudy: {}\n", understudy_text(role)));

    output
}
