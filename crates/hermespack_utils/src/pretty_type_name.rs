use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static MODULE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\w+::)").unwrap());

/// `std::any::type_name` without module paths, used as the default plugin name.
pub fn pretty_type_name<T: ?Sized>() -> Cow<'static, str> {
  MODULE_PATH_RE.replace_all(std::any::type_name::<T>(), "")
}

#[test]
fn test_pretty_type_name() {
  struct HermescPlugin;
  assert_eq!(pretty_type_name::<HermescPlugin>(), "HermescPlugin");
  assert_eq!(pretty_type_name::<std::sync::Arc<HermescPlugin>>(), "Arc<HermescPlugin>");
}
