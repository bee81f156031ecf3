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

//! Criterion benchmarks for both transpilation directions
//!
//! Sources are generated by repeating a small program so the stages can be
//! measured at several sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pythonscript::config::Config;
use pythonscript::{parse, tokenize, transpile, Dialect};

const PYTHONSCRIPT_UNIT: &str = r#"class Point{n}:
    def __init__(self, x, y):
        self.x = x
        self.y = y

    def norm(self):
        return self.x ** 2 + self.y ** 2

def total{n}(items):
    result = 0
    for i in range(len(items)):
        if items[i] % 2 == 0 and items[i] not in [4, 8]:
            result += items[i] // 2
        elif 0 < items[i] < 10:
            result -= 1
    print(f"total {result} from {len(items)} items")
    return result

"#;

const JAVASCRIPT_UNIT: &str = r#"class Point{n} extends Base {
  constructor(x, y) {
    super(x);
    this.y = y;
  }
  norm() {
    return this.x ** 2 + this.y ** 2;
  }
}

function total{n}(items) {
  let result = 0;
  for (let i = 0; i < items.length; i++) {
    if (items[i] % 2 === 0 && !items.includes(i)) {
      result += Math.floor(items[i] / 2);
    } else {
      result -= 1;
    }
  }
  console.log(`total ${result} from ${items.length} items`);
  return result;
}

"#;

fn source(unit: &str, copies: usize) -> String {
    (0..copies).map(|n| unit.replace("{n}", &n.to_string())).collect()
}

const SIZES: [usize; 3] = [1, 10, 100];

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for copies in SIZES {
        let py = source(PYTHONSCRIPT_UNIT, copies);
        group.throughput(Throughput::Bytes(py.len() as u64));
        group.bench_with_input(BenchmarkId::new("pyscript", copies), &py, |b, src| {
            b.iter(|| tokenize(black_box(src), "bench.pjs", Dialect::PythonScript).unwrap())
        });

        let js = source(JAVASCRIPT_UNIT, copies);
        group.throughput(Throughput::Bytes(js.len() as u64));
        group.bench_with_input(BenchmarkId::new("javascript", copies), &js, |b, src| {
            b.iter(|| tokenize(black_box(src), "bench.js", Dialect::JavaScript).unwrap())
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for copies in SIZES {
        let py = source(PYTHONSCRIPT_UNIT, copies);
        group.bench_with_input(BenchmarkId::new("pyscript", copies), &py, |b, src| {
            b.iter(|| parse(black_box(src), "bench.pjs", Dialect::PythonScript).unwrap())
        });

        let js = source(JAVASCRIPT_UNIT, copies);
        group.bench_with_input(BenchmarkId::new("javascript", copies), &js, |b, src| {
            b.iter(|| parse(black_box(src), "bench.js", Dialect::JavaScript).unwrap())
        });
    }
    group.finish();
}

fn bench_transpile(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("transpile");
    for copies in SIZES {
        let py = source(PYTHONSCRIPT_UNIT, copies);
        group.bench_with_input(BenchmarkId::new("pyscript_to_js", copies), &py, |b, src| {
            b.iter(|| transpile(black_box(src), "bench.pjs", Dialect::PythonScript, &config).unwrap())
        });

        let js = source(JAVASCRIPT_UNIT, copies);
        group.bench_with_input(BenchmarkId::new("js_to_pyscript", copies), &js, |b, src| {
            b.iter(|| transpile(black_box(src), "bench.js", Dialect::JavaScript, &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_parse, bench_transpile);
criterion_main!(benches);
