// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Provide ergonomic nested JSON fetching via dotted paths and tolerant typed extraction for serde_json::Value
// role: extension/serde_json
// outputs: JsonFetch trait and JsonFetched wrapper for typed extraction with defaults and string coercion
// invariants: No panics; missing paths yield None; to_or_default returns T::default on failure
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;

/// Coerce a JSON string or number into its text form.
///
/// Draw records are hand-assembled upstream, so numeric fields show up both
/// as `17` and as `"17"`; both must read the same here.
pub fn string_like(v: &serde_json::Value) -> Option<String> {
  match v {
    serde_json::Value::String(s) => Some(s.clone()),
    serde_json::Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

/// Wrapper around a JSON location to allow typed extraction via a clear second step.
pub struct JsonFetched<'a> {
  inner: Option<&'a serde_json::Value>,
}

impl<'a> JsonFetched<'a> {
  /// Attempt to deserialize the fetched value as `T`.
  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.inner.and_then(|v| serde_json::from_value::<T>(v.clone()).ok())
  }

  /// Deserialize as `T`, returning `T::default()` on failure.
  pub fn to_or_default<T>(&self) -> T
  where
    T: DeserializeOwned + Default,
  {
    self.to::<T>().unwrap_or_default()
  }

  /// Extract as text, accepting either a JSON string or a number.
  pub fn to_string_like(&self) -> Option<String> {
    self.inner.and_then(string_like)
  }
}

/// Extension to fetch nested values via dotted paths like "prizes.1st_prize".
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      match cur.get(key) {
        Some(next) => cur = next,
        None => return JsonFetched { inner: None },
      }
    }

    JsonFetched { inner: Some(cur) }
  }
}
