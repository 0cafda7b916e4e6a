// Copyright 2025 dentsusoken
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

//! User-Agent strings sent with outgoing HTTP requests.

/// The jdkswap package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for the archive download client
pub fn download_client() -> String {
    format!("jdkswap/download/{VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_user_agent() {
        assert_eq!(download_client(), format!("jdkswap/download/{VERSION}"));
        assert!(download_client().starts_with("jdkswap/"));
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be major.minor.patch");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "Version part should be a number");
        }
    }
}
