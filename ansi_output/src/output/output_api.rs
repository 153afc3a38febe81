// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, Destination, OutputDevice, OutputRequest, OutputStyle,
            StyleDescriptor, assemble, render, select_writer};

/// Resolve, render, and assemble a request into the exact bytes to write. This is pure,
/// it doesn't touch any stream.
///
/// With `interactive` set to false the result never contains an escape byte.
#[must_use]
pub fn render_request(request: &OutputRequest, interactive: bool) -> String {
    let descriptors = request.resolved_descriptors();

    let rendered = request
        .values
        .iter()
        .zip(&descriptors)
        .map(|(value, descriptor)| render(value, descriptor, interactive))
        .collect::<Vec<_>>();

    let ends_line_flags = descriptors
        .iter()
        .map(|descriptor| descriptor.ends_line)
        .collect::<Vec<_>>();

    assemble(&rendered, &ends_line_flags)
}

/// Write `request` to `device`, probing the device's interactivity now.
///
/// - No values: nothing is written, the device isn't locked.
/// - Sparse style, not interactive, and no applied descriptor targets a valid index:
///   nothing is written.
/// - Otherwise the rendered block is written and flushed.
///
/// # Errors
///
/// Returns [`crate::AnsiOutputError::Write`] if the write or flush fails.
pub fn try_output_to_device(
    device: &OutputDevice,
    request: &OutputRequest,
) -> CommonResult<()> {
    if request.is_empty() {
        tracing::trace!(message = "output: no values, nothing to write");
        return Ok(());
    }

    let writer = select_writer(device);
    let interactive = writer.is_interactive();

    if !interactive && request.style.is_sparse_without_valid_target(request.len()) {
        tracing::trace!(
            message = "output: sparse style w/ no valid target on plain writer, skipping",
            value_count = request.len()
        );
        return Ok(());
    }

    tracing::trace!(
        message = "output: writer selected",
        interactive,
        value_count = request.len(),
        is_sparse = request.style.is_sparse()
    );

    let bytes = render_request(request, interactive);
    writer.try_write_and_flush(bytes.as_bytes())
}

/// Same as [`try_output_to_device`], except that a write error is logged and dropped.
pub fn output_to_device(device: &OutputDevice, request: &OutputRequest) {
    if let Err(report) = try_output_to_device(device, request) {
        tracing::warn!(
            message = "output: failed to write",
            device = ?device,
            error = ?report
        );
    }
}

/// Write `request` to stdout or stderr.
pub fn output_request(request: &OutputRequest, destination: Destination) {
    output_to_device(&destination.output_device(), request);
}

/// Print `values` to stdout or stderr with `style`.
///
/// ```no_run
/// use ansi_output::{AppliedDescriptor, Destination, OutputStyle, StyleDescriptor, output};
///
/// // Dense.
/// output(["a", "b"], [StyleDescriptor::red_ends_line()], Destination::Standard);
/// // Sparse.
/// output(["x", "y", "z"], [AppliedDescriptor::green_at([0, 2])], Destination::Error);
/// // All normal.
/// output(["plain"], OutputStyle::default(), Destination::Standard);
/// ```
pub fn output<S: Into<String>>(
    values: impl IntoIterator<Item = S>,
    style: impl Into<OutputStyle>,
    destination: Destination,
) {
    let request = OutputRequest::new(values).with_style(style);
    output_request(&request, destination);
}

/// Print a single value.
pub fn output_value(
    value: impl Into<String>,
    descriptor: StyleDescriptor,
    destination: Destination,
) {
    let value: String = value.into();
    output([value], descriptor, destination);
}

/// Print values passed individually. Expands to [`output()`](crate::output()).
///
/// ```no_run
/// use ansi_output::{Destination, StyleDescriptor};
///
/// let name = String::from("world");
/// ansi_output::output!("hello, ", &name);
/// ansi_output::output!(to: Destination::Error; "oops");
/// ansi_output::output!(style: [StyleDescriptor::red()]; "red", " normal");
/// ansi_output::output!(
///     to: Destination::Error, style: [StyleDescriptor::yellow()];
///     "warning: ", "disk almost full",
/// );
/// ```
#[macro_export]
macro_rules! output {
    (to: $destination:expr, style: $style:expr; $($value:expr),+ $(,)?) => {
        $crate::output(
            [$(::std::string::String::from($value)),+],
            $style,
            $destination,
        )
    };
    (to: $destination:expr; $($value:expr),+ $(,)?) => {
        $crate::output(
            [$(::std::string::String::from($value)),+],
            $crate::OutputStyle::default(),
            $destination,
        )
    };
    (style: $style:expr; $($value:expr),+ $(,)?) => {
        $crate::output(
            [$(::std::string::String::from($value)),+],
            $style,
            $crate::Destination::default(),
        )
    };
    ($($value:expr),+ $(,)?) => {
        $crate::output(
            [$(::std::string::String::from($value)),+],
            $crate::OutputStyle::default(),
            $crate::Destination::default(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiColor, AppliedDescriptor, OutputDeviceExt, TextFormat};
    use pretty_assertions::assert_eq;

    #[test]
    fn render_request_dense_interactive() {
        let request = OutputRequest::new(["status: ", "OK", "done"]).described_by([
            StyleDescriptor::gray(),
            StyleDescriptor::green_ends_line_with(TextFormat::Bold),
        ]);
        assert_eq!(
            render_request(&request, true),
            "\x1b[37m\x1b[49mstatus: \x1b[0m\x1b[32m\x1b[49m\x1b[1mOK\x1b[0m\ndone\n"
        );
        assert_eq!(render_request(&request, false), "status: OK\ndone\n");
    }

    #[test]
    fn render_request_empty() {
        let request = OutputRequest::default().described_by([StyleDescriptor::red()]);
        assert_eq!(render_request(&request, true), "");
    }

    #[test]
    fn writes_to_interactive_mock() {
        let (device, stdout_mock) = OutputDevice::new_mock_interactive();
        let request = OutputRequest::new(["a"]).described_by([StyleDescriptor::custom(
            AnsiColor::Normal,
            AnsiColor::Ansi256(17),
            TextFormat::Underline,
        )]);
        try_output_to_device(&device, &request).unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[39m\x1b[48;5;17m\x1b[4ma\x1b[0m\n"
        );
        assert_eq!(stdout_mock.flush_count(), 1);
    }

    #[test]
    fn every_call_flushes() {
        let (device, stdout_mock) = OutputDevice::new_mock_non_interactive();
        let request = OutputRequest::new(["one"]);
        output_to_device(&device, &request);
        output_to_device(&device, &request);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "one\none\n");
        assert_eq!(stdout_mock.flush_count(), 2);
    }

    #[test]
    fn sparse_without_valid_target_is_noop_only_when_plain() {
        let request =
            OutputRequest::new(["x", "y"]).applying([AppliedDescriptor::red_at([7, -2])]);

        let (device, stdout_mock) = OutputDevice::new_mock_non_interactive();
        output_to_device(&device, &request);
        assert!(stdout_mock.is_empty());
        assert_eq!(stdout_mock.flush_count(), 0);

        let (device, stdout_mock) = OutputDevice::new_mock_interactive();
        output_to_device(&device, &request);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "xy\n");
    }

    #[test]
    fn sparse_with_valid_target_falls_back_to_plain() {
        let request =
            OutputRequest::new(["x", "y"]).applying([AppliedDescriptor::red_at([7, 1])]);
        let (device, stdout_mock) = OutputDevice::new_mock_non_interactive();
        output_to_device(&device, &request);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "xy\n");
    }
}
