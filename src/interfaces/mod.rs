use crate::metadata::NumberDesc;

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
  /// Returns whether the given national number (a string containing only decimal
  /// digits) matches the national number pattern defined in the given
  /// NumberDesc.
  fn match_national_number(&self, number: &str, number_desc: &NumberDesc, allow_prefix_match: bool) -> bool;

  /// Returns whether the start of the given national number matches
  /// `pattern`. Used for the leading digits of regions sharing a calling code.
  fn match_leading_digits(&self, number: &str, pattern: &str) -> bool;
}
