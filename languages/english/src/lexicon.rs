use std::collections::HashMap;
use std::path::Path;

use mavito_core::pos::UniversalTag;

// Open class: dominant reading of frequent and ambiguous words
const VERBS: &str = "be have do say go get make know think take see come want look use find \
    give tell work call try ask need feel become leave put mean keep let begin seem help show \
    hear play run move live believe bring happen write sit stand lose pay meet include continue \
    set learn change lead understand watch follow stop create speak read spend grow open walk \
    win offer remember consider appear buy wait serve die send expect build stay fall cut reach \
    kill remain suggest raise pass sell require report decide pull measure estimate sample \
    plant harvest irrigate cultivate plough sow weigh count compute calculate predict observe \
    eat drink sleep swim fly drive sing dance jump throw catch teach";

const NOUNS: &str = "time year people way day man thing woman life child world school state \
    family student group country problem hand part place case week company system program \
    question government number night point home water room mother area money story fact month \
    lot right study book eye job word business issue side kind head house service friend father \
    power hour game line end member law car city community name team minute idea kid body \
    information back parent face others level office door health person art war history party \
    result morning reason research girl guy moment air teacher force education data datum mean \
    median mode variance sample population census survey table graph chart index rate ratio \
    error bias frequency farm farmer crop soil seed grain livestock cattle fertilizer tractor \
    yield land animal interval total capital signal material individual rental arrival proposal \
    approval hospital journal festival principal potential criminal official professional \
    family supply assembly ally rally belly bully jelly lily";

const ADJECTIVES: &str = "good new first last long great little own other old big high \
    different small large next early young important few public bad same able free sure clear \
    full special easy strong certain whole real best better true hard major low late open short \
    single common poor happy simple fine wide deep dry wet hot cold warm cool fast slow rich \
    fresh raw gross net random normal mean beautiful pretty ugly quick heavy light dark bright \
    safe likely unlikely friendly lonely lovely daily weekly monthly yearly quarterly annual \
    average arable fertile organic seasonal agricultural statistical";

const ADVERBS: &str = "not also very often however too usually really never always sometimes \
    together likely simply generally instead actually again rather almost especially ever \
    quickly probably already below directly therefore else thus easily eventually exactly \
    certainly normally currently extremely finally constantly properly soon here there now then \
    today tomorrow yesterday well still just only even perhaps quite once seldom abroad ahead \
    away";

// Closed class
const DETERMINERS: &str = "the a an this that these those each every some any no all both \
    either neither";

const PRONOUNS: &str = "i you he she it we they me him her us them who whom what which myself \
    itself themselves";

const ADPOSITIONS: &str = "of in to for with on at from by about as into like through after \
    over between out against during without before under around among per via";

const CONJUNCTIONS: &str = "and or but nor yet so because if while although unless whereas \
    since than";

const AUXILIARIES: &str = "is are was were been being am can could will would shall should may \
    might must";

const INTERJECTIONS: &str = "oh ah hello wow yes hey alas";

const PARTICLES: &str = "'s up off";

const NUMERALS: &str = "zero one two three four five six seven eight nine ten hundred thousand \
    million billion";

/// English word list with each word's dominant universal tag
pub struct Lexicon {
    tags: HashMap<String, UniversalTag>,
}

impl Lexicon {
    /// Create with embedded common words
    pub fn with_defaults() -> Self {
        use UniversalTag::*;

        let mut tags = HashMap::new();

        for word in VERBS.split_whitespace() {
            tags.insert(word.to_string(), Verb);
        }
        for (words, tag) in [(NOUNS, Noun), (ADJECTIVES, Adjective), (ADVERBS, Adverb)] {
            for word in words.split_whitespace() {
                tags.entry(word.to_string()).or_insert(tag);
            }
        }

        let closed = [
            (DETERMINERS, Determiner),
            (PRONOUNS, Pronoun),
            (ADPOSITIONS, Adposition),
            (CONJUNCTIONS, Conjunction),
            (AUXILIARIES, Auxiliary),
            (INTERJECTIONS, Interjection),
            (PARTICLES, Particle),
            (NUMERALS, Numeral),
        ];
        for (words, tag) in closed {
            for word in words.split_whitespace() {
                tags.insert(word.to_string(), tag);
            }
        }

        Self { tags }
    }

    /// Load a lexicon from TSV file (word\tTAG format, UD tag names)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let mut tags = HashMap::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                if let Some(tag) = UniversalTag::from_ud(parts[1]) {
                    tags.insert(parts[0].trim().to_lowercase(), tag);
                }
            }
        }

        tracing::info!("Loaded {} lexicon entries from {}", tags.len(), path.display());
        Ok(Self { tags })
    }

    /// Merge another lexicon into this one; its entries win
    pub fn merge(mut self, other: Lexicon) -> Self {
        self.tags.extend(other.tags);
        self
    }

    /// Tag for an already lower-cased word
    pub fn get(&self, word: &str) -> Option<UniversalTag> {
        self.tags.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::with_defaults()
    }
}
