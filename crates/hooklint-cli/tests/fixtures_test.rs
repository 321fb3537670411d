// Hooklint
// Copyright (C) 2025 Hooklint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Fixture sweep: every component source under `fixtures/` must get the
//! verdict its directory name promises.

use std::fs;
use std::path::PathBuf;

use hooklint_analysis::quick_analyze;

fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures").join(name)
}

fn sweep(dir_name: &str, expect_cycle: bool) {
    let dir = fixture_dir(dir_name);
    let mut checked = 0;

    for entry in fs::read_dir(&dir).expect("fixture directory should exist") {
        let path = entry.expect("fixture entry should be readable").path();
        let source = fs::read_to_string(&path).expect("fixture should be readable");

        let result = quick_analyze(&source).expect("fixture should analyze");
        assert_eq!(
            result.has_cycle,
            expect_cycle,
            "unexpected verdict for {}",
            path.display()
        );
        checked += 1;
    }

    assert!(checked > 0, "no fixtures found in {}", dir.display());
}

#[test]
fn test_cycling_fixtures_are_flagged() {
    sweep("with_cycles", true);
}

#[test]
fn test_acyclic_fixtures_pass() {
    sweep("without_cycles", false);
}
