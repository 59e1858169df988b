//! Country name → ISO 3166-1 alpha-2 code, for the `country:2:cc` cast.
//!
//! Keys are lowercase with periods removed.

/// Look up the lowercase two-letter code for a normalized country name.
pub fn country_to_iso(name: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|(n, _)| *n == name).map(|(_, cc)| *cc)
}

const COUNTRIES: &[(&str, &str)] = &[
    ("afghanistan", "af"),
    ("aland islands", "ax"),
    ("albania", "al"),
    ("algeria", "dz"),
    ("american samoa", "as"),
    ("andorra", "ad"),
    ("angola", "ao"),
    ("anguilla", "ai"),
    ("antarctica", "aq"),
    ("antigua and barbuda", "ag"),
    ("argentina", "ar"),
    ("armenia", "am"),
    ("aruba", "aw"),
    ("australia", "au"),
    ("austria", "at"),
    ("azerbaijan", "az"),
    ("bahamas", "bs"),
    ("bahrain", "bh"),
    ("bangladesh", "bd"),
    ("barbados", "bb"),
    ("belarus", "by"),
    ("belgium", "be"),
    ("belize", "bz"),
    ("benin", "bj"),
    ("bermuda", "bm"),
    ("bhutan", "bt"),
    ("bolivia", "bo"),
    ("bonaire, sint eustatius and saba", "bq"),
    ("bosnia and herzegovina", "ba"),
    ("botswana", "bw"),
    ("bouvet island", "bv"),
    ("brazil", "br"),
    ("british indian ocean territory", "io"),
    ("brunei darussalam", "bn"),
    ("brunei", "bn"),
    ("bulgaria", "bg"),
    ("burkina faso", "bf"),
    ("burundi", "bi"),
    ("cabo verde", "cv"),
    ("cape verde", "cv"),
    ("cambodia", "kh"),
    ("cameroon", "cm"),
    ("canada", "ca"),
    ("cayman islands", "ky"),
    ("central african republic", "cf"),
    ("chad", "td"),
    ("chile", "cl"),
    ("china", "cn"),
    ("christmas island", "cx"),
    ("cocos (keeling) islands", "cc"),
    ("colombia", "co"),
    ("comoros", "km"),
    ("congo", "cg"),
    ("democratic republic of the congo", "cd"),
    ("cook islands", "ck"),
    ("costa rica", "cr"),
    ("cote d'ivoire", "ci"),
    ("ivory coast", "ci"),
    ("croatia", "hr"),
    ("cuba", "cu"),
    ("curacao", "cw"),
    ("cyprus", "cy"),
    ("czech republic", "cz"),
    ("czechia", "cz"),
    ("denmark", "dk"),
    ("djibouti", "dj"),
    ("dominica", "dm"),
    ("dominican republic", "do"),
    ("ecuador", "ec"),
    ("egypt", "eg"),
    ("el salvador", "sv"),
    ("equatorial guinea", "gq"),
    ("eritrea", "er"),
    ("estonia", "ee"),
    ("eswatini", "sz"),
    ("swaziland", "sz"),
    ("ethiopia", "et"),
    ("falkland islands", "fk"),
    ("faroe islands", "fo"),
    ("fiji", "fj"),
    ("finland", "fi"),
    ("france", "fr"),
    ("french guiana", "gf"),
    ("french polynesia", "pf"),
    ("french southern territories", "tf"),
    ("gabon", "ga"),
    ("gambia", "gm"),
    ("georgia", "ge"),
    ("germany", "de"),
    ("ghana", "gh"),
    ("gibraltar", "gi"),
    ("greece", "gr"),
    ("greenland", "gl"),
    ("grenada", "gd"),
    ("guadeloupe", "gp"),
    ("guam", "gu"),
    ("guatemala", "gt"),
    ("guernsey", "gg"),
    ("guinea", "gn"),
    ("guinea-bissau", "gw"),
    ("guyana", "gy"),
    ("haiti", "ht"),
    ("heard island and mcdonald islands", "hm"),
    ("holy see", "va"),
    ("vatican city", "va"),
    ("honduras", "hn"),
    ("hong kong", "hk"),
    ("hungary", "hu"),
    ("iceland", "is"),
    ("india", "in"),
    ("indonesia", "id"),
    ("iran", "ir"),
    ("iraq", "iq"),
    ("ireland", "ie"),
    ("isle of man", "im"),
    ("israel", "il"),
    ("italy", "it"),
    ("jamaica", "jm"),
    ("japan", "jp"),
    ("jersey", "je"),
    ("jordan", "jo"),
    ("kazakhstan", "kz"),
    ("kenya", "ke"),
    ("kiribati", "ki"),
    ("north korea", "kp"),
    ("south korea", "kr"),
    ("korea", "kr"),
    ("kosovo", "xk"),
    ("kuwait", "kw"),
    ("kyrgyzstan", "kg"),
    ("laos", "la"),
    ("latvia", "lv"),
    ("lebanon", "lb"),
    ("lesotho", "ls"),
    ("liberia", "lr"),
    ("libya", "ly"),
    ("liechtenstein", "li"),
    ("lithuania", "lt"),
    ("luxembourg", "lu"),
    ("macao", "mo"),
    ("macau", "mo"),
    ("madagascar", "mg"),
    ("malawi", "mw"),
    ("malaysia", "my"),
    ("maldives", "mv"),
    ("mali", "ml"),
    ("malta", "mt"),
    ("marshall islands", "mh"),
    ("martinique", "mq"),
    ("mauritania", "mr"),
    ("mauritius", "mu"),
    ("mayotte", "yt"),
    ("mexico", "mx"),
    ("micronesia", "fm"),
    ("moldova", "md"),
    ("monaco", "mc"),
    ("mongolia", "mn"),
    ("montenegro", "me"),
    ("montserrat", "ms"),
    ("morocco", "ma"),
    ("mozambique", "mz"),
    ("myanmar", "mm"),
    ("burma", "mm"),
    ("namibia", "na"),
    ("nauru", "nr"),
    ("nepal", "np"),
    ("netherlands", "nl"),
    ("new caledonia", "nc"),
    ("new zealand", "nz"),
    ("nicaragua", "ni"),
    ("niger", "ne"),
    ("nigeria", "ng"),
    ("niue", "nu"),
    ("norfolk island", "nf"),
    ("north macedonia", "mk"),
    ("macedonia", "mk"),
    ("northern mariana islands", "mp"),
    ("norway", "no"),
    ("oman", "om"),
    ("pakistan", "pk"),
    ("palau", "pw"),
    ("palestine", "ps"),
    ("panama", "pa"),
    ("papua new guinea", "pg"),
    ("paraguay", "py"),
    ("peru", "pe"),
    ("philippines", "ph"),
    ("pitcairn", "pn"),
    ("poland", "pl"),
    ("portugal", "pt"),
    ("puerto rico", "pr"),
    ("qatar", "qa"),
    ("reunion", "re"),
    ("romania", "ro"),
    ("russia", "ru"),
    ("russian federation", "ru"),
    ("rwanda", "rw"),
    ("saint barthelemy", "bl"),
    ("saint helena", "sh"),
    ("saint kitts and nevis", "kn"),
    ("saint lucia", "lc"),
    ("saint martin", "mf"),
    ("saint pierre and miquelon", "pm"),
    ("saint vincent and the grenadines", "vc"),
    ("samoa", "ws"),
    ("san marino", "sm"),
    ("sao tome and principe", "st"),
    ("saudi arabia", "sa"),
    ("senegal", "sn"),
    ("serbia", "rs"),
    ("seychelles", "sc"),
    ("sierra leone", "sl"),
    ("singapore", "sg"),
    ("sint maarten", "sx"),
    ("slovakia", "sk"),
    ("slovenia", "si"),
    ("solomon islands", "sb"),
    ("somalia", "so"),
    ("south africa", "za"),
    ("south georgia and the south sandwich islands", "gs"),
    ("south sudan", "ss"),
    ("spain", "es"),
    ("sri lanka", "lk"),
    ("sudan", "sd"),
    ("suriname", "sr"),
    ("svalbard and jan mayen", "sj"),
    ("sweden", "se"),
    ("switzerland", "ch"),
    ("syria", "sy"),
    ("syrian arab republic", "sy"),
    ("taiwan", "tw"),
    ("tajikistan", "tj"),
    ("tanzania", "tz"),
    ("thailand", "th"),
    ("timor-leste", "tl"),
    ("east timor", "tl"),
    ("togo", "tg"),
    ("tokelau", "tk"),
    ("tonga", "to"),
    ("trinidad and tobago", "tt"),
    ("tunisia", "tn"),
    ("turkey", "tr"),
    ("turkiye", "tr"),
    ("turkmenistan", "tm"),
    ("turks and caicos islands", "tc"),
    ("tuvalu", "tv"),
    ("uganda", "ug"),
    ("ukraine", "ua"),
    ("united arab emirates", "ae"),
    ("uae", "ae"),
    ("united kingdom", "gb"),
    ("uk", "gb"),
    ("great britain", "gb"),
    ("united states", "us"),
    ("united states of america", "us"),
    ("usa", "us"),
    ("us", "us"),
    ("united states minor outlying islands", "um"),
    ("uruguay", "uy"),
    ("uzbekistan", "uz"),
    ("vanuatu", "vu"),
    ("venezuela", "ve"),
    ("vietnam", "vn"),
    ("viet nam", "vn"),
    ("british virgin islands", "vg"),
    ("us virgin islands", "vi"),
    ("wallis and futuna", "wf"),
    ("western sahara", "eh"),
    ("yemen", "ye"),
    ("zambia", "zm"),
    ("zimbabwe", "zw"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(country_to_iso("germany"), Some("de"));
        assert_eq!(country_to_iso("usa"), Some("us"));
        assert_eq!(country_to_iso("Germany"), None);
        assert_eq!(country_to_iso("atlantis"), None);
    }

    #[test]
    fn test_codes_are_two_lowercase_letters() {
        for (name, cc) in COUNTRIES {
            assert!(cc.len() == 2 && cc.bytes().all(|b| b.is_ascii_lowercase()), "{name}: {cc}");
            assert!(!name.contains('.'), "{name}");
        }
    }
}
