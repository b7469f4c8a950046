use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Attribute, Color as CtColor, Stylize};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::notifications::{Notification, NotificationKind};

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

/// Turns every styled print of this module on or off.
pub fn set_color_enabled(enabled: bool) {
    crossterm::style::force_color_output(enabled);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 215,
        b: 255,
    };
    pub const TEAL: Color = Color::Rgb {
        r: 0,
        g: 175,
        b: 150,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 80,
        g: 250,
        b: 123,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const AMBER: Color = Color::Rgb {
        r: 255,
        g: 184,
        b: 0,
    };
    pub const BLUE: Color = Color::Rgb {
        r: 98,
        g: 160,
        b: 255,
    };
    pub const LAVENDER: Color = Color::Rgb {
        r: 189,
        g: 147,
        b: 249,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 240,
        g: 240,
        b: 240,
    };
    pub const DIM: Color = Color::Rgb {
        r: 110,
        g: 110,
        b: 120,
    };
}

/// Accent color of each notification kind.
pub fn kind_color(kind: NotificationKind) -> CtColor {
    match kind {
        NotificationKind::User => colors::BLUE,
        NotificationKind::Alert => colors::AMBER,
        NotificationKind::System => colors::LAVENDER,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Box Drawing Characters
// ═══════════════════════════════════════════════════════════════════════════════

pub mod box_chars {
    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
    pub const ROUND_BOTTOM_LEFT: &str = "╰";
    pub const ROUND_BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";

    pub const T_LEFT: &str = "├";
    pub const T_RIGHT: &str = "┤";
    pub const T_TOP: &str = "┬";
    pub const T_BOTTOM: &str = "┴";
    pub const CROSS: &str = "┼";

    pub const ARROW_RIGHT: &str = "▶";
    pub const BULLET: &str = "●";
    pub const BULLET_EMPTY: &str = "○";
    pub const DIAMOND: &str = "◆";
    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
}

// ═══════════════════════════════════════════════════════════════════════════════
// Banner
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_banner() {
    let banner = r#"
    ███╗   ██╗ ██████╗ ████████╗██╗███████╗██╗   ██╗
    ████╗  ██║██╔═══██╗╚══██╔══╝██║██╔════╝╚██╗ ██╔╝
    ██╔██╗ ██║██║   ██║   ██║   ██║█████╗   ╚████╔╝
    ██║╚██╗██║██║   ██║   ██║   ██║██╔══╝    ╚██╔╝
    ██║ ╚████║╚██████╔╝   ██║   ██║██║        ██║
    ╚═╝  ╚═══╝ ╚═════╝    ╚═╝   ╚═╝╚═╝        ╚═╝
"#;

    let gradient_colors = [
        colors::CYAN,
        colors::CYAN,
        colors::TEAL,
        colors::TEAL,
        colors::BLUE,
        colors::BLUE,
        colors::LAVENDER,
    ];

    for (i, line) in banner.lines().enumerate() {
        let color = gradient_colors.get(i).unwrap_or(&colors::CYAN);
        println!("{}", line.with(*color).bold());
    }

    let subtitle = "  ─────────────────  NOTIFICATION CENTER  ─────────────────";
    println!("{}", subtitle.with(colors::DIM));
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Indicators
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_success(message: &str) {
    println!(
        " {} {}",
        box_chars::CHECK.with(colors::GREEN).bold(),
        message.with(colors::GREEN)
    );
}

pub fn print_error(message: &str) {
    println!(
        " {} {}",
        box_chars::CROSS_MARK.with(colors::RED).bold(),
        message.with(colors::RED)
    );
}

pub fn print_warning(message: &str) {
    println!(
        " {} {}",
        "⚠".with(colors::AMBER).bold(),
        message.with(colors::AMBER)
    );
}

pub fn print_info(message: &str) {
    println!(
        " {} {}",
        "ℹ".with(colors::BLUE).bold(),
        message.with(colors::BLUE)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Section Headers
// ═══════════════════════════════════════════════════════════════════════════════

const SECTION_WIDTH: usize = 60;

pub fn print_section_header(title: &str) {
    let title_len = title.width();
    let padding = SECTION_WIDTH.saturating_sub(title_len + 4) / 2;

    println!();
    print!("{}", box_chars::ROUND_TOP_LEFT.with(colors::CYAN));
    print!(
        "{}",
        box_chars::HORIZONTAL.repeat(padding).with(colors::CYAN)
    );
    print!(
        " {} ",
        title.with(colors::CYAN).bold().attribute(Attribute::Italic)
    );
    print!(
        "{}",
        box_chars::HORIZONTAL
            .repeat(SECTION_WIDTH.saturating_sub(title_len + 4 + padding))
            .with(colors::CYAN)
    );
    println!("{}", box_chars::ROUND_TOP_RIGHT.with(colors::CYAN));
}

pub fn print_section_footer() {
    print!("{}", box_chars::ROUND_BOTTOM_LEFT.with(colors::CYAN));
    print!(
        "{}",
        box_chars::HORIZONTAL.repeat(SECTION_WIDTH).with(colors::CYAN)
    );
    println!("{}", box_chars::ROUND_BOTTOM_RIGHT.with(colors::CYAN));
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Notifications
// ═══════════════════════════════════════════════════════════════════════════════

/// One `display()` line, bullet filled while unread.
pub fn print_notification(notification: &Notification) {
    let (bullet, color) = if notification.is_read() {
        (box_chars::BULLET_EMPTY, colors::DIM)
    } else {
        (box_chars::BULLET, kind_color(notification.kind()))
    };
    println!(
        "  {}  {}",
        bullet.with(color),
        notification.to_string().with(colors::WHITE)
    );
}

pub fn print_delivery(kind: NotificationKind, line: &str) {
    println!(
        "  {}  {}",
        box_chars::ARROW_RIGHT.with(kind_color(kind)),
        line.with(kind_color(kind)).bold()
    );
}

pub fn print_empty_list(message: &str) {
    println!(
        "  {} {}",
        box_chars::BULLET_EMPTY.with(colors::DIM),
        message.with(colors::DIM).attribute(Attribute::Italic)
    );
}

/// Formats a unix timestamp in local time for the detailed view.
pub fn format_timestamp(timestamp: i64) -> String {
    use chrono::{Local, TimeZone};

    match Local.timestamp_opt(timestamp, 0).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Table Display
// ═══════════════════════════════════════════════════════════════════════════════

pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl TableBuilder {
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        TableBuilder {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
            col_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(cell.width());
            }
        }
        self.rows.push(row);
    }

    fn print_border(&self, left: &str, junction: &str, right: &str) {
        print!("{}", left.with(colors::CYAN));
        for (i, width) in self.col_widths.iter().enumerate() {
            print!(
                "{}",
                box_chars::HORIZONTAL.repeat(width + 2).with(colors::CYAN)
            );
            if i < self.col_widths.len() - 1 {
                print!("{}", junction.with(colors::CYAN));
            }
        }
        println!("{}", right.with(colors::CYAN));
    }

    fn print_cells(&self, cells: &[String], color: CtColor, bold: bool) {
        print!("{}", box_chars::VERTICAL.with(colors::CYAN));
        for (i, cell) in cells.iter().enumerate() {
            let width = self.col_widths.get(i).copied().unwrap_or(0);
            let padding = width.saturating_sub(cell.width());
            let styled = if bold {
                cell.clone().with(color).bold()
            } else {
                cell.clone().with(color)
            };
            print!(" {}{} ", styled, " ".repeat(padding));
            print!("{}", box_chars::VERTICAL.with(colors::CYAN));
        }
        println!();
    }

    pub fn print(&self) {
        if self.col_widths.is_empty() {
            return;
        }
        self.print_border(
            box_chars::ROUND_TOP_LEFT,
            box_chars::T_TOP,
            box_chars::ROUND_TOP_RIGHT,
        );
        self.print_cells(&self.headers, colors::CYAN, true);
        self.print_border(box_chars::T_LEFT, box_chars::CROSS, box_chars::T_RIGHT);
        for row in &self.rows {
            self.print_cells(row, colors::WHITE, false);
        }
        self.print_border(
            box_chars::ROUND_BOTTOM_LEFT,
            box_chars::T_BOTTOM,
            box_chars::ROUND_BOTTOM_RIGHT,
        );
    }
}

pub fn print_notifications_table(notifications: &[Notification]) {
    let mut table = TableBuilder::new(vec!["ID", "Kind", "Message", "Read", "Created"]);
    for n in notifications {
        table.add_row(vec![
            n.id().to_string(),
            n.kind().to_string(),
            n.message().to_string(),
            if n.is_read() { "yes" } else { "no" }.to_string(),
            format_timestamp(n.created_at()),
        ]);
    }
    table.print();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Prompt Styling
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_prompt(username: &str, unread: usize) -> String {
    let badge = if unread > 0 {
        format!(" ({} unread)", unread)
            .with(colors::AMBER)
            .to_string()
    } else {
        String::new()
    };
    format!(
        "{}{} {} ",
        username.with(colors::TEAL).bold(),
        badge,
        "❯".with(colors::CYAN).bold(),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// Welcome Message
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_welcome(username: &str) {
    println!(
        "  {} {}",
        "Welcome".with(colors::GREEN).bold(),
        username.with(colors::TEAL).bold()
    );
    println!(
        "  {} {}",
        "Version:".with(colors::DIM),
        env!("APP_VERSION").with(colors::WHITE)
    );
    println!(
        "  {}",
        "Type 'help' for available commands".with(colors::DIM)
    );
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Help Display
// ═══════════════════════════════════════════════════════════════════════════════

pub struct CommandHelp {
    pub name: String,
    pub args: String,
    pub description: String,
}

pub fn print_help(commands: &[CommandHelp]) {
    print_section_header("Available Commands");
    println!();

    let (notification_commands, session_commands): (Vec<_>, Vec<_>) = commands
        .iter()
        .partition(|c| !matches!(c.name.as_str(), "help" | "exit"));

    fn print_command_group(title: &str, commands: &[&CommandHelp], color: CtColor) {
        println!(
            "  {} {}",
            box_chars::DIAMOND.with(color),
            title.with(color).bold()
        );
        for cmd in commands {
            println!(
                "      {} {}  {}",
                cmd.name.as_str().with(colors::GREEN).bold(),
                cmd.args.as_str().with(colors::DIM),
                cmd.description.as_str().with(colors::WHITE)
            );
        }
        println!();
    }

    print_command_group("Notifications", &notification_commands, colors::CYAN);
    print_command_group("Session", &session_commands, colors::AMBER);

    print_section_footer();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Goodbye Message
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_goodbye(username: &str) {
    println!();
    println!(
        "  {} {}",
        "👋".with(colors::CYAN),
        format!("Goodbye, {}!", username)
            .with(colors::LAVENDER)
            .bold()
    );
    println!();
}

pub fn flush() {
    let _ = io::stdout().flush();
}
