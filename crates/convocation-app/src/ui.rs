//! Terminal rendering of the derived form view.
//!
//! Purely presentational; every decision lives in the controller.

use crate::error::AppResult;
use registration_form::{FormView, MessageTone};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-based stdin prompter.
pub struct Prompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print a label and read one trimmed line.
    pub async fn ask(&mut self, label: &str) -> AppResult<String> {
        print!("{}: ", label);
        std::io::stdout().flush()?;
        let line = self.lines.next_line().await?.unwrap_or_default();
        Ok(line.trim().to_string())
    }
}

/// Render the current form view.
pub fn render(view: &FormView) {
    print!("{}", format_view(view));
}

/// Format the form view as display lines.
fn format_view(view: &FormView) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("Convocation 2025 Registration\n");
    out.push_str("-----------------------------\n");

    if view.loading {
        out.push_str("Loading...\n");
        return out;
    }

    if let Some(message) = &view.message {
        match message.tone {
            MessageTone::Info => out.push_str(&format!("[info] {}\n", message.text)),
            MessageTone::Error => out.push_str(&format!("[error] {}\n", message.text)),
        }
    }

    out.push_str(&format!("Full Name:   {}\n", view.full_name));
    out.push_str(&format!("Department:  {}\n", view.department));
    out.push_str(&format!("Email:       {}\n", view.email));
    out.push_str(&format!("Roll Number: {}\n", view.roll_number));

    let guests = view
        .guest_count
        .map(|g| g.to_string())
        .unwrap_or_else(|| "-".into());
    out.push_str(&format!("Guests:      {}\n", guests));

    if let Some(error) = &view.guest_error {
        out.push_str(&format!("  ! {}\n", error));
    }
    if let Some(name) = &view.guardian_1 {
        out.push_str(&format!(
            "Guardian 1:  {}\n",
            if name.is_empty() { "-" } else { name }
        ));
    }
    if let Some(name) = &view.guardian_2 {
        out.push_str(&format!(
            "Guardian 2:  {}\n",
            if name.is_empty() { "-" } else { name }
        ));
    }

    if view.submitting {
        out.push_str("Processing...\n");
    }
    if view.locked {
        out.push_str("(registration locked; all fields read-only)\n");
    }

    out
}

/// Render the ticket/confirmation view shown after a successful submit.
pub fn render_ticket(view: &FormView) {
    println!();
    println!("=============================");
    println!(" Convocation 2025 - Your Pass");
    println!("=============================");
    println!("Name:        {}", view.full_name);
    println!("Department:  {}", view.department);
    println!("Roll Number: {}", view.roll_number);
    println!("Guests:      {}", view.guest_count.unwrap_or(0));
    if let Some(name) = view.guardian_1.as_deref().filter(|n| !n.is_empty()) {
        println!("Guardian 1:  {}", name);
    }
    if let Some(name) = view.guardian_2.as_deref().filter(|n| !n.is_empty()) {
        println!("Guardian 2:  {}", name);
    }
    println!();
    println!("You will receive a confirmation mail for your pass.");
}

/// Render the login redirect, optionally carrying a fatal error.
pub fn render_login_redirect(error: Option<&str>) {
    println!();
    match error {
        Some(text) => println!("Signed out: {}", text),
        None => println!("No active session."),
    }
    println!("Please sign in again to continue.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editable_view() -> FormView {
        FormView {
            loading: false,
            submitting: false,
            locked: false,
            full_name: "A".into(),
            department: "CS".into(),
            email: "a@x.com".into(),
            roll_number: "1".into(),
            guest_count: Some(1),
            guest_error: None,
            guardian_1: Some("K. Varma".into()),
            guardian_2: None,
            message: None,
            submit_enabled: true,
        }
    }

    #[test]
    fn test_format_view_loading() {
        let view = FormView {
            loading: true,
            ..editable_view()
        };

        let out = format_view(&view);
        assert!(out.contains("Loading..."));
        assert!(!out.contains("Full Name"));
    }

    #[test]
    fn test_format_view_shows_processing_while_submitting() {
        let view = FormView {
            submitting: true,
            ..editable_view()
        };

        let out = format_view(&view);
        assert!(out.contains("Processing..."));
        assert!(!out.contains("read-only"));
    }

    #[test]
    fn test_format_view_locked_with_info_message() {
        let view = FormView {
            locked: true,
            message: Some(registration_form::FormMessage::info("Registration Data Loaded")),
            ..editable_view()
        };

        let out = format_view(&view);
        assert!(out.contains("[info] Registration Data Loaded"));
        assert!(out.contains("read-only"));
        assert!(!out.contains("Processing..."));
    }

    #[test]
    fn test_format_view_hides_unrequired_guardian() {
        let out = format_view(&editable_view());
        assert!(out.contains("Guardian 1:  K. Varma"));
        assert!(!out.contains("Guardian 2"));
    }
}
