//! Static biography content for the `about` command.

use crate::tui::settings;
use crate::tui::style::{emphasis, StyleColor};

const FUN_FACTS: [&str; 11] = [
    "I'm majoring in Computer Engineering 🧑‍💻 and minoring in CS",
    "I like to write short stories 📝",
    "I'm a Student 📕 and TA at SFU 🎓",
    "I like mystery movies 🎥",
    "I can't sing 🎤 but I'm a music lover 🎧",
    "I'm a gamer 🎮",
    "I've traveled a lot 🛫",
    "I'm an avid photographer 📷",
    "I love cooking 🍳",
    "I'm a dreamer 💭",
    "I've been coding since middle school 📖",
];

/// Biography block, one entry per output line.
pub fn about_lines(year: i32) -> Vec<String> {
    let magenta = |text: &str| emphasis(text, StyleColor::Magenta);
    let cyan = |text: &str| emphasis(text, StyleColor::Cyan);

    let mut lines = vec![
        " Hello World!".to_string(),
        " ".to_string(),
        format!(
            " I'm a {} student pursuing a {} degree with a minor in Computing Sciences. \
             Passionate about coding, I specialize in {}. I began self-learning programming in \
             middle school and continued to develop my skills through my degree. Check out my \
             GitHub for projects and my journey on {}. Click on the link or simply type {} to \
             check it out!",
            magenta("4th-year Simon Fraser University"),
            magenta("Computer Engineering"),
            magenta("C and Python"),
            cyan(&format!("{} https://sahajs.com", settings::GLYPH_WEBSITE)),
            cyan("website"),
        ),
        " ".to_string(),
        " Here are some fun facts about me:".to_string(),
    ];
    lines.extend(
        FUN_FACTS
            .iter()
            .map(|fact| format!("   {} {fact}", magenta(settings::GLYPH_BULLET))),
    );
    lines.push(" ".to_string());
    lines.push(format!(
        " Thanks for visiting my terminal portfolio! Make sure to check out my {} and {} by simply typing {}!",
        cyan(&format!("{} GitHub", settings::GLYPH_GITHUB)),
        cyan(&format!("{} LinkedIn", settings::GLYPH_LINKEDIN)),
        cyan("contact"),
    ));
    lines.push(format!(
        " {} {year} Sahaj Singh. All Rights Reserved.",
        settings::GLYPH_COPYRIGHT
    ));
    lines
}
