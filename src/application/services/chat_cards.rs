//! Chat card builders - rendered markup for the module's chat messages

use crate::domain::entities::{Character, ChatCard, Speaker};

/// Build the card posted when a character activates Tag Team.
///
/// The card shows the character's portrait as a backdrop with their name
/// and the action line over it.
pub fn activation_card(character: &Character) -> ChatCard {
    let portrait = character.portrait_asset.as_deref().unwrap_or_default();

    let mut content = String::new();
    content.push_str("<div class=\"chat-card dh-tagteam-card\">\n");
    content.push_str(
        "  <header class=\"card-header flexrow dh-tagteam-header\">\n    \
         <h3 class=\"noborder dh-tagteam-title\">Tag Team Activated</h3>\n  </header>\n",
    );
    content.push_str(&format!(
        "  <div class=\"card-content dh-tagteam-content\" style=\"background-image: url('{}');\">\n",
        portrait
    ));
    content.push_str("    <div class=\"dh-tagteam-overlay\"></div>\n");
    content.push_str("    <div class=\"dh-tagteam-inner\">\n");
    content.push_str(&format!(
        "      <div class=\"dh-tagteam-actor-name\">{}</div>\n",
        character.name
    ));
    content.push_str(
        "      <div class=\"dh-tagteam-action-text\">\
         <span class=\"dh-tagteam-highlight\">Stepped in to help!</span></div>\n",
    );
    content.push_str("    </div>\n  </div>\n</div>");

    ChatCard::new(
        Speaker::Character {
            id: character.id,
            name: character.name.clone(),
        },
        content,
    )
}

/// Build the table-wide summary card posted after a bulk reset.
pub fn reset_card(reset_count: usize) -> ChatCard {
    let mut content = String::new();
    content.push_str("<div class=\"chat-card dh-tagteam-card\">\n");
    content.push_str(
        "  <header class=\"card-header flexrow dh-tagteam-header\">\n    \
         <h3 class=\"noborder dh-tagteam-title\">The Fall Ends</h3>\n  </header>\n",
    );
    content.push_str(
        "  <div class=\"card-content dh-tagteam-content dh-tagteam-reset-bg\">\n",
    );
    content.push_str("    <div class=\"dh-tagteam-overlay\"></div>\n");
    content.push_str("    <div class=\"dh-tagteam-inner\">\n");
    content.push_str("      <div class=\"dh-tagteam-actor-name\">Tag Team Reset</div>\n");
    content.push_str(&format!(
        "      <div class=\"dh-tagteam-action-text\">\
         <span class=\"dh-tagteam-highlight\">{}</span> Characters Recovered</div>\n",
        reset_count
    ));
    content.push_str("    </div>\n  </div>\n</div>");

    ChatCard::new(Speaker::Table, content)
}
