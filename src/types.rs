// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for
/// scoring normalized company names.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the name of a company as an owned `String`, exactly as supplied.
pub type CompanyName = String;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`. The
/// symbol is treated as opaque and is not validated.
pub type TickerSymbol = String;

/// The canonical, lowercase, punctuation-free, stop-word-stripped form of a
/// company name. Used both as an exact-match key and as the token basis for
/// fuzzy scoring.
pub type NormalizedKey = String;

/// An ordered list of reference directory rows, where each entry includes:
/// - `TickerSymbol`: The company's stock ticker.
/// - `CompanyName`: The company's name as supplied.
pub type ReferenceList = Vec<(TickerSymbol, CompanyName)>;
