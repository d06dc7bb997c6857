/// Builds the final dial string from a format template.
///
/// Substitution is ordered and single-occurrence: the first `{number}`, then
/// the first `{amount}`, then the first `{code}`. `{number}` and `{code}`
/// receive the same value, so a template author may write either token for a
/// pay-to-number or a pay-to-code format. Tokens not present in the template
/// are skipped; repeated tokens past the first stay verbatim.
///
/// The result is not validated here. A non-numeric amount passes through
/// unchanged; callers guard against empty inputs before dialing.
pub fn build_dial_code(template: &str, number: &str, amount: &str) -> String {
    template
        .replacen("{number}", number, 1)
        .replacen("{amount}", amount, 1)
        .replacen("{code}", number, 1)
}
