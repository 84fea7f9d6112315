// Bundled Training Corpus
// Labeled example texts used to (re)train the bundled classifier when no
// persisted model artifact is available. Binary labels: fake, satire, and
// clickbait examples count as misleading; real news and opinion do not.

pub const FAKE_NEWS_TEXTS: &[&str] = &[
    "BREAKING: Secret document reveals shocking conspiracy in government",
    "You won't believe what celebrities are hiding from the public",
    "Doctor discovers miracle cure that big pharma doesn't want you to know about",
    "Anonymous source reveals shocking truth about political leader",
    "Scientists baffled by mysterious phenomenon that defies explanation",
    "Secret insider information reveals market manipulation",
    "Government trying to hide the truth about controversial project",
    "This one trick will eliminate all your health problems overnight",
    "What the mainstream media isn't telling you about this crisis",
    "Leaked documents expose massive cover-up by officials",
    "BOMBSHELL: President caught in secret late-night deal with foreign agents",
    "Doctors STUNNED by this new weight loss trick - no diet or exercise needed",
    "The miracle food that kills cancer cells - BANNED by big pharmaceutical companies",
    "Former government agent reveals classified alien contact cover-up",
    "What the elite don't want you to know about the banking system",
    "SHOCKING truth about vaccines the CDC is desperately trying to hide",
    "Military insider confirms secret weapon that could change warfare forever",
    "Breaking news: Famous celebrity reveals industry's darkest secret",
    "This common household item is slowly poisoning your family",
    "Scientists discover the REAL reason behind global climate patterns",
    "PROOF: Election rigged by shadowy international organization",
    "Top doctor fired after discovering THIS cure for all diseases",
    "Secret society controlling world governments exposed in leaked emails",
    "Internet to be shut down nationwide next week - prepare NOW",
    "Famous billionaire's secret to wealth THEY don't want you to know",
    "Expert warns: Major disaster predicted within 30 days",
    "Child genius solves problem scientists have struggled with for decades",
    "Government implementing secret plan to monitor all citizens",
    "Alternative health practitioner discovers cure for ALL autoimmune diseases",
    "LEAKED: Internal memo shows company knowingly poisoned water supply",
    "Why mainstream media is hiding this major health breakthrough",
    "Whistleblower reveals classified documents about secret military operations",
    "New evidence proves historical event was actually staged",
    "This everyday food causes cancer according to suppressed research",
    "Famous politician caught on hidden camera revealing true agenda",
    "The shocking connection between common medication and early death",
    "Secret technology can control the weather - government admits",
    "Major corporation paying millions to hide this information from public",
    "ALERT: Internet shutdown planned to prevent spread of this information",
    "Scientist who discovered cure for major disease found dead under mysterious circumstances",
    "Your phone is secretly recording everything - former tech employee reveals all",
    "Government planning to implant microchips in all citizens by 2025",
    "Hidden camera catches doctors admitting vaccines cause harm",
    "Celebrity's death wasn't natural - insider reveals shocking truth",
    "Former banker exposes how the 1% controls the global economy",
    "NASA employee breaks silence about what's REALLY on the moon",
    "Secret ingredient in popular foods designed to make you addicted",
    "BREAKING: Major world leader secretly building nuclear weapons",
    "This simple solution cures diabetes instantly - doctors hate it",
    "Former intelligence officer reveals classified mind control program",
];

pub const REAL_NEWS_TEXTS: &[&str] = &[
    "Senate passes bipartisan infrastructure bill after months of negotiations",
    "Scientists publish findings of climate study in peer-reviewed journal",
    "Company announces quarterly earnings below analyst expectations",
    "Mayor proposes new budget with focus on community development",
    "Research shows correlation between exercise and improved mental health",
    "Court rules on controversial case after reviewing evidence",
    "Study finds new treatment effective for specific medical condition",
    "Officials respond to concerns about public health measures",
    "Economic indicators suggest slow but steady growth in coming months",
    "International conference addresses global challenges through diplomatic solutions",
    "Stock market closes higher following Federal Reserve announcement",
    "City council approves funding for infrastructure improvement project",
    "Recent study identifies potential risk factors for cardiovascular disease",
    "Local school district implements new educational program",
    "Company reports 15% increase in quarterly revenue compared to last year",
    "Governor signs bill to expand healthcare access in rural communities",
    "Weather service predicts above-average precipitation for coming season",
    "University researchers publish findings on renewable energy efficiency",
    "National park announces temporary closure for trail maintenance",
    "Transportation department begins highway construction project",
    "FDA approves new medication following extensive clinical trials",
    "County officials discuss plans for emergency preparedness",
    "Museum opens new exhibition featuring historical artifacts",
    "Agricultural report shows increase in crop yields despite drought conditions",
    "Health department releases updated guidelines for disease prevention",
    "Consumer spending increased by 2.4% in the first quarter",
    "Police department implements community engagement initiative",
    "Census data reveals demographic shifts in metropolitan areas",
    "Committee recommends updates to building safety regulations",
    "Library system expands digital resources for remote learning",
    "Environmental study shows improvement in air quality over five-year period",
    "State legislature debates funding for public education programs",
    "Medical researchers identify genetic marker associated with rare condition",
    "Technology company announces plan to reduce carbon emissions by 2030",
    "Survey indicates changing consumer preferences in retail market",
    "Housing development project approved after environmental review",
    "Health officials monitor cases of seasonal influenza",
    "Manufacturing sector reports steady employment figures",
    "Transportation study identifies traffic patterns in urban centers",
    "International trade agreement enters final negotiation phase",
    "Community college expands vocational training programs",
    "Energy company invests in renewable infrastructure development",
    "Scientists document changes in local ecosystem after conservation efforts",
    "School board approves budget for upcoming academic year",
    "Expert panel discusses implications of recent economic data",
    "Archeologists uncover artifacts at historical site",
    "Court of appeals upholds ruling in precedent-setting case",
    "Consumer protection agency issues guidelines for online transactions",
    "City implements water conservation measures during dry season",
    "Public health study examines effectiveness of prevention programs",
];

pub const OPINION_TEXTS: &[&str] = &[
    "I believe the new policy will have serious consequences for our economy",
    "Why I think the government's approach to healthcare is fundamentally flawed",
    "The case for renewable energy: A perspective on climate policy",
    "My view: Tax cuts benefit the wealthy more than the middle class",
    "Opinion: The education system needs significant reform to prepare students for the future",
    "Editorial: Why we should reconsider our approach to immigration",
    "Commentary: The real problem with social media regulation",
    "Analysis: What the election results mean for the country's future",
    "Perspective: The hidden costs of healthcare reform",
    "The argument for a four-day work week and its economic benefits",
    "Why I've changed my mind about nuclear energy as a climate solution",
    "How we should think about AI regulation in the coming decade",
    "The case against expanding military intervention overseas",
    "In my view, the housing crisis requires bold government action",
    "Why consumer protection laws don't go far enough - my perspective",
];

pub const SATIRE_TEXTS: &[&str] = &[
    "Nation's leading experts confirm whatever you want to hear",
    "Man who just woke up from 20-year coma immediately asks to be put back under",
    "Report: We should have seen economic crisis coming, say experts who did not see economic crisis coming",
    "Area man passionate defender of what he imagines the Constitution to be",
    "Study finds link between headlines containing the phrase 'study finds' and not reading the article",
    "Scientists discover new form of life that evolved specifically to host podcast",
    "Child returns from summer camp somehow both more mature and grosser than ever",
    "Local man decides to give online dating 37th chance",
    "New study shows people who point out grammatical errors have no friends",
    "Report: Average person becomes unstoppably ravenous the moment they enter grocery store",
    "Area dad ruins three-hour movie by whispering questions throughout",
    "Facebook completes two-year project to add 'haha' reaction to all posts about climate change",
    "Nation decides to just throw all daily news in trash for 24-hour mental health break",
    "Local politician passionate about issue after it affects him personally",
    "Study finds waiting for your food while watching others who ordered after you get served first is leading cause of death",
];

pub const CLICKBAIT_TEXTS: &[&str] = &[
    "You won't believe what happens next!",
    "This one weird trick will change your life forever",
    "Doctors hate her for discovering this simple solution",
    "10 shocking secrets the government doesn't want you to know - #7 will blow your mind!",
    "What this celebrity did will leave you speechless",
    "I tried this for a week and you won't believe the results",
    "This simple hack can save you thousands - banks are furious!",
    "The truth about this everyday food will shock you",
    "She opened her door to find THIS - I'm still in tears",
    "This simple morning routine is transforming people's lives",
    "Watch what happens when this baby sees a dog for the first time",
    "They thought nobody was watching, but the camera caught everything",
    "Scientists are baffled by this new discovery",
    "This quiz will reveal your true personality - 99% get it wrong!",
    "I couldn't believe my eyes when I saw the transformation",
];

/// Full labeled corpus: (text, is_misleading).
pub fn labeled_corpus() -> Vec<(&'static str, bool)> {
    let mut corpus = Vec::new();
    corpus.extend(FAKE_NEWS_TEXTS.iter().map(|t| (*t, true)));
    corpus.extend(REAL_NEWS_TEXTS.iter().map(|t| (*t, false)));
    corpus.extend(OPINION_TEXTS.iter().map(|t| (*t, false)));
    corpus.extend(SATIRE_TEXTS.iter().map(|t| (*t, true)));
    corpus.extend(CLICKBAIT_TEXTS.iter().map(|t| (*t, true)));
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_is_complete_and_labeled() {
        let corpus = labeled_corpus();
        assert_eq!(
            corpus.len(),
            FAKE_NEWS_TEXTS.len()
                + REAL_NEWS_TEXTS.len()
                + OPINION_TEXTS.len()
                + SATIRE_TEXTS.len()
                + CLICKBAIT_TEXTS.len()
        );

        let misleading = corpus.iter().filter(|(_, label)| *label).count();
        assert_eq!(
            misleading,
            FAKE_NEWS_TEXTS.len() + SATIRE_TEXTS.len() + CLICKBAIT_TEXTS.len()
        );
    }
}
