// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Number formatting for human-readable log and error messages.

fn format_with_commas(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    result.push_str(sign);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Extension trait for formatting integers with thousands separators.
pub trait Separable {
    /// Formats the number with commas as thousands separators, e.g. `200,000`.
    fn separate_with_commas(&self) -> String;
}

macro_rules! impl_separable {
    ($($t:ty),*) => {
        $(
            impl Separable for $t {
                fn separate_with_commas(&self) -> String {
                    format_with_commas(&self.to_string())
                }
            }
        )*
    };
}

impl_separable!(i32, i64, isize, u32, u64, usize);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(4, "4")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(200_000, "200,000")]
    #[case(200_001, "200,001")]
    #[case(1_234_567, "1,234,567")]
    fn test_separate_with_commas(#[case] input: usize, #[case] expected: &str) {
        assert_eq!(input.separate_with_commas(), expected);
    }

    #[rstest]
    #[case(-1, "-1")]
    #[case(-1_000, "-1,000")]
    #[case(-123_456, "-123,456")]
    fn test_separate_negative_with_commas(#[case] input: i64, #[case] expected: &str) {
        assert_eq!(input.separate_with_commas(), expected);
    }
}
