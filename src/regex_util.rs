// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Wraps `pattern` so that it only matches the whole input. Plain `find`
/// prefers the leftmost-first alternative, so `1|12` would report "1" for
/// "12"; anchoring both ends makes the engine keep looking.
pub fn full_match_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

/// Wraps `pattern` so that it only matches at the start of the input.
pub fn prefix_match_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}
