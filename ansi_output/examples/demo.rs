// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example demo`. Pipe it (`| cat`) to see the plain text
//! fallback, or set `NO_COLOR=1`.

use ansi_output::{AnsiColor, AppliedDescriptor, Destination, OutputRequest,
                  StyleDescriptor, TextFormat, TracingConfig, output, output_request,
                  output_value, read_line, try_initialize_logging_global};

fn main() -> miette::Result<()> {
    try_initialize_logging_global(
        TracingConfig::new_file(Some("ansi_output_demo.log".to_string()))
            .with_level(tracing::Level::TRACE),
    )?;

    // Dense: one descriptor per value.
    output(
        ["build: ", "passed", " in 4.2s"],
        [
            StyleDescriptor::gray(),
            StyleDescriptor::green_with(TextFormat::Bold),
            StyleDescriptor::normal_with(TextFormat::Dim),
        ],
        Destination::Standard,
    );

    // Sparse: highlight a few values, leave the rest alone.
    let request = OutputRequest::new(["a", "b", "c", "d", "e"]).applying([
        AppliedDescriptor::red_at([0, 4]),
        AppliedDescriptor::new(
            StyleDescriptor::custom(
                AnsiColor::Black,
                AnsiColor::LightYellow,
                TextFormat::Underline,
            ),
            [2],
        ),
    ]);
    output_request(&request, Destination::Standard);
    output_request(&request, Destination::Error);

    // 256 colors.
    let values = (0..8).map(|it| format!(" {:3} ", it * 32)).collect::<Vec<_>>();
    let descriptors = (0..8)
        .map(|it| {
            StyleDescriptor::default()
                .with_background(AnsiColor::Ansi256(it * 32))
                .with_color(AnsiColor::White)
        })
        .collect::<Vec<_>>();
    output(values, descriptors, Destination::Standard);

    ansi_output::output!(to: Destination::Error; "warnings go to ", "stderr");
    output_value(
        "What is your name? (blank to skip)",
        StyleDescriptor::cyan(),
        Destination::Standard,
    );

    match read_line() {
        Some(name) => ansi_output::output!(
            style: [StyleDescriptor::normal(), StyleDescriptor::magenta_with(TextFormat::Bold)];
            "Hello, ", name
        ),
        None => {
            Destination::Standard.clear_line();
            ansi_output::output!("Skipped.");
        }
    }

    Ok(())
}
