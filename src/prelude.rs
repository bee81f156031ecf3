// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Runtime helpers for generated JavaScript
//!
//! PythonScript's `len` and `range` builtins have no direct JavaScript
//! counterpart; the header defines them so generated code can run as is.

const STDLIB_HEADER: &str = r#"// --- PythonScript stdlib (minimal) ---
function print(...args) { console.log(...args); }
function len(x) { return x?.length ?? 0; }
function range(start, end, step = 1) {
  if (end === undefined) {
    end = start;
    start = 0;
  }
  const res = [];
  for (let i = start; step > 0 ? i < end : i > end; i += step) {
    res.push(i);
  }
  return res;
}
"#;

/// Header prepended to JavaScript output when the prelude is enabled
pub fn stdlib_header() -> &'static str {
    STDLIB_HEADER
}
