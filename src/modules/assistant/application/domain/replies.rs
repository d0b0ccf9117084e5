//! Canned user-facing replies for bridge failures, verbatim from the source
//! site. Which one a visitor sees depends on a crude substring sniff of the
//! underlying error; the structural detail only ever reaches the logs.

pub const CONNECTION_REFUSED_REPLY: &str = "System Error: Connection to the neural grid was \
     refused. Please check your API credentials or network settings.";

pub const RECALIBRATING_REPLY: &str = "The assistant is currently recalibrating its neural \
     pathways. Please try your query again in a moment.";
