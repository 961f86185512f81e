//! Welcome, sign-in, sign-up and password reset screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_input::Input;

use crate::account::PasswordStrength;

use super::app::App;
use super::forms::{display_value, LoginField, RegisterField, ResetStep};
use super::utils::{centered_rect, checkbox, focused, heading, muted, render_input, BRAND};

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("⚽", Style::default().fg(BRAND))),
        Line::from(""),
        Line::from(Span::styled("FutsalKu", heading())),
        Line::from("Booking Lapangan Futsal Jadi Lebih Mudah"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[ Masuk ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(BRAND)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[ Daftar ]", Style::default().fg(BRAND)),
        ]),
        Line::from(""),
        Line::from(Span::styled("© 2025 FutsalKu. All rights reserved.", muted())),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BRAND)));
    f.render_widget(paragraph, area);
}

/// Rows of a vertically stacked form: a title block, then fixed-height fields
fn form_rows(area: Rect, title_height: u16, fields: usize, tail: u16) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(title_height)];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(fields));
    constraints.push(Constraint::Length(tail));
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(centered_rect(70, 100, area))
        .to_vec()
}

fn title(text: &str, subtitle: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(text.to_string(), heading())),
        Line::from(Span::styled(subtitle.to_string(), muted())),
    ])
    .wrap(Wrap { trim: true })
}

fn field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    secret: bool,
    visible: bool,
    is_focused: bool,
) {
    render_input(
        f,
        area,
        label,
        &display_value(input, secret, visible),
        input.visual_cursor(),
        is_focused,
    );
}

fn link(text: &str, is_focused: bool) -> Span<'static> {
    Span::styled(
        format!("{}{}", if is_focused { "▶ " } else { "  " }, text),
        focused(is_focused).add_modifier(Modifier::UNDERLINED),
    )
}

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.login;
    let rows = form_rows(area, 3, 2, 4);

    f.render_widget(
        title("Selamat Datang Kembali!", "Masuk untuk melanjutkan booking"),
        rows[0],
    );
    field(
        f,
        rows[1],
        "Email atau Nomor HP",
        &form.email,
        false,
        false,
        form.focus == LoginField::Email,
    );
    field(
        f,
        rows[2],
        "Password",
        &form.password,
        true,
        form.show_password,
        form.focus == LoginField::Password,
    );

    let actions = Paragraph::new(vec![
        Line::from(link("Lupa Password?", form.focus == LoginField::ForgotLink)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Belum punya akun? ", muted()),
            link("Daftar Sekarang", form.focus == LoginField::RegisterLink),
        ]),
    ]);
    f.render_widget(actions, rows[3]);
}

pub fn render_register(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.register;
    let rows = form_rows(area, 2, 5, 5);

    f.render_widget(
        title("Buat Akun Baru", "Daftar untuk mulai booking lapangan"),
        rows[0],
    );

    let text_fields = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Phone,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];
    for (row, kind) in rows[1..6].iter().zip(text_fields) {
        if let Some(input) = form.input(kind) {
            let secret = matches!(kind, RegisterField::Password | RegisterField::ConfirmPassword);
            let label = if kind == RegisterField::Password {
                let strength = form.strength();
                if strength == PasswordStrength::Empty {
                    kind.label().to_string()
                } else {
                    format!("{} - {}", kind.label(), strength.label())
                }
            } else {
                kind.label().to_string()
            };
            field(f, *row, &label, input, secret, form.show_password, form.focus == kind);
        }
    }

    let terms_focused = form.focus == RegisterField::Terms;
    let actions = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(
                "{}{} Saya setuju dengan Syarat & Ketentuan dan Kebijakan Privasi",
                if terms_focused { "▶ " } else { "  " },
                checkbox(form.accept_terms)
            ),
            focused(terms_focused),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}[ Daftar ]",
                if form.focus == RegisterField::Submit { "▶ " } else { "  " }
            ),
            focused(form.focus == RegisterField::Submit).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Sudah punya akun? ", muted()),
            link("Masuk", form.focus == RegisterField::LoginLink),
        ]),
    ]);
    f.render_widget(actions, rows[6]);
}

pub fn render_forgot_password(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.forgot;
    let step = format!("Langkah {} dari 4", form.step.number());

    match form.step {
        ResetStep::EnterEmail => {
            let rows = form_rows(area, 4, 1, 2);
            f.render_widget(
                title(
                    "Lupa Password?",
                    "Masukkan email atau nomor HP yang terdaftar untuk reset password",
                ),
                rows[0],
            );
            field(f, rows[1], "Email atau Nomor HP", &form.email, false, false, true);
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled("[Enter] Kirim Link Reset", focused(true))),
                    Line::from(Span::styled(step, muted())),
                ]),
                rows[2],
            );
        }
        ResetStep::CheckInbox => {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled("Cek Email/SMS Anda", heading())),
                Line::from(""),
                Line::from(format!(
                    "Kami telah mengirimkan link reset password ke {}. Silakan cek dan ikuti instruksinya.",
                    form.email.value()
                )),
                Line::from(""),
                Line::from(Span::styled("[Enter] Lanjutkan", focused(true))),
                Line::from(Span::styled("[r] Kirim Ulang Link", muted())),
                Line::from(""),
                Line::from(Span::styled(step, muted())),
            ])
            .wrap(Wrap { trim: true });
            f.render_widget(paragraph, centered_rect(70, 100, area));
        }
        ResetStep::NewPassword => {
            let rows = form_rows(area, 3, 2, 2);
            f.render_widget(
                title("Reset Password", "Buat password baru untuk akun Anda"),
                rows[0],
            );
            field(
                f,
                rows[1],
                "Password Baru",
                &form.new_password,
                true,
                form.show_password,
                !form.on_confirm,
            );
            field(
                f,
                rows[2],
                "Konfirmasi Password Baru",
                &form.confirm_password,
                true,
                form.show_password,
                form.on_confirm,
            );
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled("[Enter] Reset Password", focused(true))),
                    Line::from(Span::styled(step, muted())),
                ]),
                rows[3],
            );
        }
        ResetStep::Done => {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled("✓ Berhasil!", heading())),
                Line::from(""),
                Line::from(
                    "Password Anda telah berhasil direset. Silakan masuk dengan password baru Anda.",
                ),
                Line::from(""),
                Line::from(Span::styled("[Enter] Masuk Sekarang", focused(true))),
            ])
            .wrap(Wrap { trim: true });
            f.render_widget(paragraph, centered_rect(70, 100, area));
        }
    }
}
