// Built-in street-name corpus.
//
// Street suffixes and directions from the USPS official abbreviation list,
// Russian street types (Copyright (C) 2011-2012 Dmitry Marakasov, from
// streetmangler), German abbreviations and compound compass points. The
// compiled table is built once per process and shared read-only.

use std::sync::{Arc, LazyLock};

use abbrev_core::EquivalenceClass;

use crate::table::RuleTable;

/// USPS street suffixes and directions.
const ENGLISH: &[&[&str]] = &[
    &["alley", "aly"],
    &["and", "&"],
    &["annex", "anx"],
    &["arcade", "arc"],
    &["avenue", "ave"],
    &["beach", "bch"],
    &["burg", "bg"],
    &["bluff", "blf"],
    &["boulevard", "blvd"],
    &["bend", "bnd"],
    &["branch", "br"],
    &["bridge", "brg"],
    &["brook", "brk"],
    &["bottom", "btm"],
    &["bayoo", "byu"],
    &["circle", "cir"],
    &["club", "clb"],
    &["cliff", "clf"],
    &["common", "cmn"],
    &["corner", "cor"],
    &["camp", "cp"],
    &["cape", "cpe"],
    &["crescent", "cr", "cres"],
    &["creek", "crk"],
    &["course", "crse"],
    &["crest", "crst"],
    &["causeway", "cswy"],
    &["court", "ct"],
    &["center", "ctr"],
    &["curve", "curv"],
    &["cove", "cv"],
    &["canyon", "cyn"],
    &["dale", "dl"],
    &["dam", "dm"],
    &["drive", "dr"],
    &["divide", "dv"],
    &["east", "e"],
    &["estate", "est"],
    &["expressway", "expy"],
    &["extension", "ext"],
    &["field", "fld"],
    &["flat", "flt"],
    &["ford", "frd"],
    &["forge", "frg"],
    &["fork", "frk"],
    &["forest", "frst"],
    &["ferry", "fry"],
    &["fort", "ft"],
    &["freeway", "fwy"],
    &["garden", "gdn"],
    &["glen", "gln"],
    &["green", "grn"],
    &["grove", "grv"],
    &["gateway", "gtwy"],
    &["harbor", "hbr"],
    &["hill", "hl"],
    &["hollow", "holw"],
    &["haven", "hvn"],
    &["highway", "hwy"],
    &["inlet", "inlt"],
    &["island", "is"],
    &["junction", "jct"],
    &["knoll", "knl"],
    &["key", "ky"],
    &["lock", "lck"],
    &["lodge", "ldg"],
    &["loaf", "lf"],
    &["light", "lgt"],
    &["lake", "lk"],
    &["lane", "ln"],
    &["landing", "lndg"],
    &["meadow", "mdw"],
    &["mill", "ml"],
    &["manor", "mnr"],
    &["mission", "msn"],
    &["mount", "mt"],
    &["mountain", "mtn"],
    &["motorway", "mtwy"],
    &["neck", "nck"],
    &["north", "n"],
    &["orchard", "orch"],
    &["parkway", "pkwy"],
    &["place", "pl"],
    &["plain", "pln"],
    &["plaza", "plz"],
    &["pine", "pne"],
    &["prairie", "pr"],
    &["port", "prt"],
    &["passage", "psge"],
    &["point", "pt"],
    &["radial", "radl"],
    &["road", "rd"],
    &["ridge", "rdg"],
    &["river", "riv"],
    &["ranch", "rnch"],
    &["rapid", "rpd"],
    &["rest", "rst"],
    &["route", "rte"],
    &["shoal", "shl"],
    &["shore", "shr"],
    &["skyway", "skwy"],
    &["south", "s"],
    &["summit", "smt"],
    &["spring", "spg"],
    &["square", "sq"],
    &["street", "st"],
    &["station", "sta"],
    &["stravenue", "stra"],
    &["stream", "strm"],
    &["terrace", "ter"],
    &["turnpike", "tpke"],
    &["track", "trak"],
    &["trace", "trce"],
    &["trafficway", "trfy"],
    &["trail", "trl"],
    &["throughway", "trwy"],
    &["tunnel", "tunl"],
    &["union", "un"],
    &["viaduct", "via"],
    &["vista", "vis"],
    &["ville", "vl"],
    &["village", "vlg"],
    &["valley", "vly"],
    &["view", "vw"],
    &["way", "wy"],
    &["well", "wl"],
    &["west", "w"],
    &["crossing", "xing"],
    &["crossroad", "xrd"],
];

/// Russian street types.
const RUSSIAN: &[&[&str]] = &[
    &["улица", "ул"],
    &["площадь", "пл"],
    &["переулок", "пер", "пер-к"],
    &["проезд", "пр-д"],
    &["шоссе", "ш"],
    &["бульвар", "бул", "б-р"],
    &["тупик", "туп"],
    &["набережная", "наб"],
    &["проспект", "просп", "пр-кт", "пр-т"],
    &["тракт", "тр-т", "тр"],
    &["эстакада", "эст"],
    &["район", "р-н"],
    &["микрорайон", "мкр-н", "мк-н", "мкр", "мкрн"],
    &["посёлок", "поселок", "пос"],
    &["деревня", "дер", "д"],
    &["квартал", "кв-л", "кв"],
];

/// German (and Swiss German) abbreviations.
const GERMAN: &[&[&str]] = &[
    &["anschlussstelle", "as"],
    &["an", "a"],
    &["bahnhof", "bf"],
    &["bürgermeister", "bgm"],
    &["der", "d"],
    &["den", "d"],
    &["evangelische", "ev", "evang"],
    &["evangelischer", "ev", "evang"],
    &["evangelisches", "ev", "evang"],
    &["evangelisch", "ev", "evang"],
    &["fachhochschule", "fh"],
    &["gasse", "g"],
    &["gemeinschaft", "gem"],
    &["gemeinschafts", "gem"],
    &["groß", "gr"],
    &["große", "gr"],
    &["großer", "gr"],
    &["großes", "gr"],
    &["grundschule", "gs"],
    &["gymnasium", "gym", "gymn"],
    &["hauptbahnhof", "hbf"],
    &["hauptschule", "hs"],
    &["hochschule", "hs"],
    &["johann", "joh"],
    &["johannes", "joh"],
    &["katholische", "kath"],
    &["katholischer", "kath"],
    &["katholisches", "kath"],
    &["katholisch", "kath"],
    &["kindergarten", "kiga"],
    &["kindertagesstätte", "kita"],
    &["klein", "kl"],
    &["kleine", "kl"],
    &["kleiner", "kl"],
    &["kleines", "kl"],
    &["krankenhaus", "kh", "krkh", "krh", "krhs"],
    &["obere", "ob"],
    &["oberer", "ob"],
    &["oberes", "ob"],
    &["platz", "pl"],
    &["realschule", "rs"],
    &["römisch", "röm"],
    &["samtgemeinde", "sg"],
    &["sankt", "st"],
    &["sebastian", "seb"],
    &["straße", "str"],
    &["und", "u", "&"],
    &["universität", "uni"],
    &["unterer", "unt"],
    &["unteres", "unt"],
    &["untere", "unt"],
    &["vom", "v"],
    &["von dem", "vd"],
    &["von der", "vd"],
    &["von", "v"],
    &["weg", "wg"],
    &["strasse", "str"],
];

/// Abbreviated suffixes of German compound street names ("Hauptstr").
const COMPOUND_SUFFIXES: &[&[&str]] = &[
    &["weg", "wg"],
    &["strasse", "str"],
    &["straße", "str"],
    &["gasse", "g"],
    &["platz", "pl"],
];

/// Compound compass points, spelled out with and without separators.
const COMPASS: &[&[&str]] = &[
    &["ne", "north east", "northeast"],
    &["nw", "north west", "northwest"],
    &["se", "south east", "southeast"],
    &["sw", "south west", "southwest"],
    &["nne", "north north east"],
    &["ene", "east north east"],
    &["ese", "east south east"],
    &["sse", "south south east"],
    &["ssw", "south south west"],
    &["wsw", "west south west"],
    &["wnw", "west north west"],
    &["nnw", "north north west"],
];

/// Every corpus section.
const SECTIONS: &[&[&[&str]]] = &[ENGLISH, RUSSIAN, GERMAN, COMPOUND_SUFFIXES, COMPASS];

static DEFAULT_TABLE: LazyLock<Arc<RuleTable>> =
    LazyLock::new(|| Arc::new(RuleTable::compile(&default_classes())));

/// The built-in corpus as equivalence classes.
pub fn default_classes() -> Vec<EquivalenceClass> {
    SECTIONS
        .iter()
        .flat_map(|section| section.iter())
        .enumerate()
        .filter_map(|(i, members)| EquivalenceClass::new(i, *members).ok())
        .collect()
}

/// The built-in corpus, compiled on first use.
pub fn default_table() -> Arc<RuleTable> {
    Arc::clone(&DEFAULT_TABLE)
}
