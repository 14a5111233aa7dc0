use dsaflow_lib::graph::NodeStatus;
use dsaflow_lib::packets::{
    ChallengeContent, ConceptContent, ConnectionContent, Packet, PacketContent, RecallContent,
    VisualContent,
};

const WIDTH: usize = 80;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in `color` when colors are on
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn status_color(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Completed => Color::GREEN,
        NodeStatus::Current => Color::YELLOW,
        NodeStatus::Unlocked => Color::CYAN,
        NodeStatus::Locked => Color::GRAY,
    }
}

pub fn status_marker(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Completed => "✓",
        NodeStatus::Current => "▶",
        NodeStatus::Unlocked => "○",
        NodeStatus::Locked => "·",
    }
}

/// Difficulty as five stars, e.g. "★★☆☆☆"
pub fn stars(difficulty: u8) -> String {
    let filled = usize::from(difficulty.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Render a packet's content to terminal text
pub fn render_packet(packet: &Packet, use_color: bool) -> String {
    let mut lines = match &packet.content {
        PacketContent::Concept(content) => render_concept(content, use_color),
        PacketContent::Visual(content) => render_visual(content, use_color),
        PacketContent::Challenge(content) => render_challenge(content, use_color),
        PacketContent::Connection(content) => render_connection(content, use_color),
        PacketContent::Recall(content) => render_recall(content, use_color),
    };

    // Remove trailing blank line
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

fn label(text: &str, use_color: bool) -> String {
    paint(text, Color::DIM, use_color)
}

fn card(lines: &mut Vec<String>, title: &str, text: &str, use_color: bool) {
    lines.push(label(title, use_color));
    lines.extend(wrap_lines(text, "  ", WIDTH));
    lines.push(String::new());
}

fn render_concept(content: &ConceptContent, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    card(&mut lines, "EXPLANATION", content.explanation, use_color);
    card(&mut lines, "ANALOGY", content.analogy, use_color);

    lines.push(label("KEY POINTS", use_color));
    for point in content.key_points {
        lines.extend(wrap_lines(&format!("→ {}", point), "  ", WIDTH));
    }
    lines.push(String::new());
    lines
}

fn render_visual(content: &VisualContent, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    card(&mut lines, "INSTRUCTION", content.instruction, use_color);

    if !content.data.is_empty() {
        let cells: Vec<String> = content.data.iter().map(|n| n.to_string()).collect();
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(1).max(2);

        let values = cells
            .iter()
            .map(|c| format!("[{:>w$}]", c, w = width))
            .collect::<Vec<_>>()
            .join(" ");
        let indexes = (0..cells.len())
            .map(|i| format!(" {:>w$} ", i, w = width))
            .collect::<Vec<_>>()
            .join(" ");

        lines.push(format!("  {}", values));
        lines.push(format!("  {}", paint(&indexes, Color::GRAY, use_color)));
        if let Some(target) = content.target {
            lines.push(format!("  target: {}", target));
        }
        lines.push(String::new());
    }

    lines.push(label(&format!("animation: {}", content.animation), use_color));
    lines.push(String::new());
    lines
}

fn render_challenge(content: &ChallengeContent, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    card(&mut lines, "QUESTION", content.question, use_color);

    for (i, option) in content.options.iter().enumerate() {
        let letter = (b'a' + i as u8) as char;
        lines.push(format!("  {}) {}", letter, option));
    }
    lines.push(String::new());
    lines
}

fn render_connection(content: &ConnectionContent, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for example in content.examples {
        lines.push(paint(example.title, Color::BOLD, use_color));
        lines.extend(wrap_lines(example.description, "  ", WIDTH));
        lines.push(String::new());
    }
    lines
}

fn render_recall(content: &RecallContent, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    card(&mut lines, "QUESTION", content.question, use_color);
    card(&mut lines, "ANSWER", content.answer, use_color);
    card(&mut lines, "THINK ABOUT", content.follow_up, use_color);
    lines
}

/// Feedback for a challenge answer, with the explanation
pub fn render_answer(content: &ChallengeContent, answer: &str, use_color: bool) -> String {
    let mut lines = Vec::new();
    if content.is_correct(answer) {
        lines.push(paint("Correct!", Color::GREEN, use_color));
    } else {
        lines.push(paint(
            &format!("Not quite. The answer is {}.", content.correct),
            Color::RED,
            use_color,
        ));
    }
    lines.extend(wrap_lines(content.explanation, "  ", WIDTH));
    lines.join("\n")
}

pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.len());

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= effective_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(format!("{}{}", prefix, current_line));
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(format!("{}{}", prefix, current_line));
        }
    }

    if lines.is_empty() && !text.is_empty() {
        lines.push(format!("{}{}", prefix, text));
    }

    lines
}
