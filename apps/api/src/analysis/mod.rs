// Candidate intelligence: section segmentation, skill extraction, role-fit scoring,
// profile and explanation-prompt building. Everything except `explanation` and
// `handlers` is pure and synchronous.

pub mod explanation;
pub mod fit_scoring;
pub mod handlers;
pub mod pipeline;
pub mod profile;
pub mod prompts;
pub mod sections;
pub mod skills;
pub mod text;
