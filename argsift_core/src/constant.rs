pub(crate) const DASH: char = '-';
pub(crate) const EQUALS_DELIMITER: char = '=';
