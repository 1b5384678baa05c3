// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Format a duration in seconds as a zero-padded `HH:MM:SS` string.
///
/// Hours of 100 or more are rendered with as many digits as needed.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remainder = seconds % 60;

    format!("{hours:02}:{minutes:02}:{remainder:02}")
}
