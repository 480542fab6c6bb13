//! Report instruction sent to the proxy.

use crate::clock::ReferenceTime;
use crate::domain::GenerationRequest;
use crate::language::Language;

/// Natural-language instruction for today's report, in `language`.
#[must_use]
pub fn build_prompt(time: &ReferenceTime, language: Language) -> String {
    let today = language.long_date(&time.local());
    format!(
        "Today is {today}. Research the latest news and updates about Punch, the baby \
         macaque (snow monkey) living at Ichikawa City Zoo, Japan.\n\
         Focus on what he did today or recently, his relationships with the other monkeys, \
         and his plush toy.\n\
         Write a daily report in {language_name}, in a friendly, engaging and informative tone.\n\
         If nothing specific can be found for today, describe his general current status and \
         development.\n\
         Format the report as markdown.",
        language_name = language.english_name(),
    )
}

/// Full request for today's report: the prompt plus the web-search tool.
#[must_use]
pub fn report_request(time: &ReferenceTime, language: Language) -> GenerationRequest {
    GenerationRequest::with_web_search(build_prompt(time, language))
}
