use crate::{Context, Error};

pub const RESOURCES_TEXT: &str = "\
**🌈 LGBTQ+ Support Resources**

**National Resources:**
- 🧠 [Trans Lifeline](https://translifeline.org/): Peer support and crisis line run by trans people.
- 💬 [The Trevor Project](https://www.thetrevorproject.org/): Crisis support for LGBTQ+ youth.
- 🏥 [Planned Parenthood](https://www.plannedparenthood.org/): Gender-affirming healthcare and info.
- 📚 [Gender Spectrum](https://www.genderspectrum.org/): Youth-focused education and family resources.
- 🌍 [Informed Consent Map](https://tinyurl.com/4mwpm892): Find gender-affirming providers by location.
- 📖 [Name & Gender Marker Guide](https://transequality.org/documents): Legal docs by state (U.S.).

**New Jersey & Bergen County:**
- 🧠 [Equality Mental Health](https://equalitymentalhealth.com/): LGBTQ+ affirming therapy & groups.
- 🏳️‍🌈 [Bergen County LGBTQ+ Alliance](https://www.bergencountylgbtq.org/): Local advocacy & events.
- 🏥 [Bergen New Bridge Medical Center](https://www.newbridgehealth.org/health-services/lgbtq-health/): Affirming care & services.
- 🎓 [Bergen Community College Resources](https://bergen.edu/student-life/virtual-lgbtq-center/lgbtq-center-resources/): Campus support.
- 🏳️‍⚧️ [PFLAG Bergen County](https://www.pflagnj.org/): Family & ally support.
- 🏠 [West Bergen Rainbow Resources](https://westbergen.org/lgbtq-services-rainbow-resources/): Youth support (ages 16–20).
- 📞 [Bergen County LGBTQ+ Office](https://www.co.bergen.nj.us/division-of-office-of-lgbtq-services/office-of-lgbtq-services-and-resources): County-wide services.
- 🎉 [Club Feathers](https://clubfeathers.com/): Longstanding LGBTQ+ bar & venue in River Edge, NJ.
";

pub const LEGAL_HELP_TEXT: &str = "\
**⚖️ Legal Help for Trans Folks in New Jersey**

**📄 Name & Gender Marker Changes:**
- 🏛️ [NJ Courts Name Change Instructions](https://www.njcourts.gov/self-help/name-change/name-change-adults): Step-by-step PDF for adult name changes.
- 🧾 [Trans Equality – NJ Legal Protections](https://www.nj.gov/transgender/legal-protections/): Covers the legal rights of trans folks in NJ.
- 💳 [NJ MVC Gender Marker Policy](https://www.nj.gov/transgender/name-changes/drivers-license-gender-change.shtml): Allows 'M', 'F', or 'X' on your license/ID without medical documentation.

**💼 Free Legal Support & Clinics:**
- ⚖️ [Garden State Equality](https://www.gardenstateequality.org/): Advocacy org that can help with legal referrals.
- 🧑‍⚖️ [Volunteer Lawyers for Justice NJ](https://www.vljnj.org/): Offers free legal assistance for name changes and civil matters.
- 🏳️‍🌈 [LGBT Bar Association of Greater NY](https://www.lgbtbarny.org/): May connect you with trans-affirming legal support in the tri-state area.
";

/// National and local LGBTQ+ support services
#[poise::command(prefix_command)]
pub async fn resources(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(RESOURCES_TEXT).await?;
    Ok(())
}

/// Legal help for trans folks in New Jersey
#[poise::command(prefix_command)]
pub async fn legalhelp(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(LEGAL_HELP_TEXT).await?;
    Ok(())
}
