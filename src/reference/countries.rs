// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The 34 supported countries, in worldwide-table order.

use super::{ConsoleRegion, CountryInfo, Language};

use Language::*;

pub static COUNTRIES: &[CountryInfo] = &[
    CountryInfo {
        code: 1,
        regions: 47,
        languages: &[Japanese],
        console_region: ConsoleRegion::Japan,
        position_hex: Some(
            "A2A4C828AF52B964B478AA64AA73AA87AD9BA5969B96A09EADA5A2A987947F8E78A096A5919B9B8782A591AF82AF7AB978AA6EAA6DB364AF73B96BC05AA546AA55AF4BB437B95FC358BA46C350C82DBE26C623CD2DD237C837D728E14849395A",
        ),
        names: ["日本", "Japan", "Japan", "Japon", "Japón", "Giappone", "Japan"],
    },
    CountryInfo {
        code: 10,
        regions: 24,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["アルゼンチン", "Argentina", "Argentinien", "Argentine", "Argentina", "Argentina", "Argentinië"],
    },
    CountryInfo {
        code: 16,
        regions: 27,
        languages: &[English, Spanish, Portuguese, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: Some(
            "A4862664E8648E1E4141C873D746CD9E7DA0B4467878B99B8746E35385BEC855C2AEE94D82DC4B6996C8A5AAE3699687E15AA064",
        ),
        names: ["ブラジル", "Brazil", "Brasilien", "Brésil", "Brasil", "Brasile", "Brazilië"],
    },
    CountryInfo {
        code: 18,
        regions: 13,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: Some(
            "87BE3CA009981EA064AAC8C3F0A8E1AAC89BD7C3D4BDAAAA50AF1E695C405649505A3C787841647D8E89",
        ),
        names: ["カナダ", "Canada", "Kanada", "Canada", "Canadá", "Canada", "Canada"],
    },
    CountryInfo {
        code: 20,
        regions: 13,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["チリ", "Chile", "Chile", "Chili", "Chile", "Cile", "Chili"],
    },
    CountryInfo {
        code: 21,
        regions: 33,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: Some(
            "7C7D78739BC8695AAA5A71247D468D6B6E6E579887326946969BC896649B9119782D8C8C4BA58D4864B2677B647328194E19875A733E6E825A87",
        ),
        names: ["コロンビア", "Colombia", "Kolumbien", "Colombie", "Colombia", "Colombia", "Colombia"],
    },
    CountryInfo {
        code: 22,
        regions: 7,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["コスタリカ", "Costa Rica", "Costa Rica", "Costa Rica", "Costa Rica", "Costa Rica", "Costa Rica"],
    },
    CountryInfo {
        code: 25,
        regions: 22,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["エクアドル", "Ecuador", "Ecuador", "Equateur", "Ecuador", "Ecuador", "Ecuador"],
    },
    CountryInfo {
        code: 30,
        regions: 22,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["グアテマラ", "Guatemala", "Guatemala", "Guatemala", "Guatemala", "Guatemala", "Guatemala"],
    },
    CountryInfo {
        code: 36,
        regions: 32,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: Some(
            "37508FB0786914465A5A69A54B7D98B69B9E8AAF9687E6A07DAF82918C787DA2649B91B476988BA1EBAA5F7D8CBE91A52B6F67B2A5C8C8C899AE738CC8B9D7B4",
        ),
        names: ["メキシコ", "Mexico", "Mexiko", "Mexique", "México", "Messico", "Mexico"],
    },
    CountryInfo {
        code: 40,
        regions: 10,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: Some("A05DAF7B1E7373737D5A739BAA5250823AA0"),
        names: ["パナマ", "Panama", "Panama", "Panama", "Panamá", "Panamá", "Panama"],
    },
    CountryInfo {
        code: 42,
        regions: 25,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["ペルー", "Peru", "Peru", "Pérou", "Perú", "Perù", "Peru"],
    },
    CountryInfo {
        code: 49,
        regions: 52,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: Some(
            "D25E78D252E748E1AA87917D3C7819645A64E04EDC5FC8A0BE872EE628DF18D98C5A3C46A064AA5F7869B46C9191E249DC64EB37A53FAF5087419169A08C5037D2737337735AE440DC55557D2D5AD746E254B95D7D7D2341CD55E84CC87D714BAA7878914164CD69DC3F272F9B46C3645550F0BE",
        ),
        names: ["アメリカ", "United States", "Vereinigte Staaten", "Etats-Unis d’Amérique", "Estados Unidos de América", "Stati Uniti d'America", "Verenigde Staten"],
    },
    CountryInfo {
        code: 52,
        regions: 25,
        languages: &[English, Spanish, FrenchCanadian],
        console_region: ConsoleRegion::Ntsc,
        position_hex: None,
        names: ["ベネズエラ", "Venezuela", "Venezuela", "Venezuela", "Venezuela", "Venezuela", "Venezuela"],
    },
    CountryInfo {
        code: 65,
        regions: 8,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["オーストラリア", "Australia", "Australien", "Australie", "Australia", "Australia", "Australië"],
    },
    CountryInfo {
        code: 66,
        regions: 9,
        languages: &[German, French, Italian, Dutch],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["オーストリア", "Austria", "Österreich", "Autriche", "Austria", "Austria", "Oostenrijk"],
    },
    CountryInfo {
        code: 67,
        regions: 3,
        languages: &[German, French, Italian, Dutch],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ベルギー", "Belgium", "Belgien", "Belgique", "Bélgica", "Belgio", "België"],
    },
    CountryInfo {
        code: 74,
        regions: 17,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["デンマーク", "Denmark", "Dänemark", "Danemark", "Dinamarca", "Danimarca", "Denemarken"],
    },
    CountryInfo {
        code: 76,
        regions: 6,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["フィンランド", "Finland", "Finnland", "Finlande", "Finlandia", "Finlandia", "Finland"],
    },
    CountryInfo {
        code: 77,
        regions: 26,
        languages: &[French],
        console_region: ConsoleRegion::Pal,
        position_hex: Some(
            "8246DC465AB49196463CA06E28467864AA46E6E6C86E6E3296C87896C84678C88C14505A8C2D508CC8C8BE96",
        ),
        names: ["フランス", "France", "Frankreich", "France", "Francia", "Francia", "Frankrijk"],
    },
    CountryInfo {
        code: 78,
        regions: 16,
        languages: &[German],
        console_region: ConsoleRegion::Pal,
        position_hex: Some("B95A64966EDC9BC8C86E5F417837AF2D7350467841AA3CBEBE919664781E8C8C"),
        names: ["ドイツ", "Germany", "Deutschland", "Allemagne", "Alemania", "Germania", "Duitsland"],
    },
    CountryInfo {
        code: 79,
        regions: 13,
        languages: &[English, Spanish, Portuguese],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ギリシャ", "Greece", "Griechenland", "Grèce", "Grecia", "Grecia", "Griekenland"],
    },
    CountryInfo {
        code: 82,
        regions: 8,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["アイルランド", "Ireland", "Irland", "Irlande", "Irlanda", "Irlanda", "Ierland"],
    },
    CountryInfo {
        code: 83,
        regions: 20,
        languages: &[Italian],
        console_region: ConsoleRegion::Pal,
        position_hex: Some(
            "7D822328283C324B463264196432821E64466464786E82649682A08CA0A0BE96B9AABEBE96E63CB4",
        ),
        names: ["イタリア", "Italy", "Italien", "Italie", "Italia", "Italia", "Italië"],
    },
    CountryInfo {
        code: 88,
        regions: 3,
        languages: &[German, French, Italian, Dutch],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ルクセンブルク", "Luxembourg", "Luxemburg", "Luxembourg", "Luxemburgo", "Lussemburgo", "Luxemburg"],
    },
    CountryInfo {
        code: 94,
        regions: 12,
        languages: &[Dutch],
        console_region: ConsoleRegion::Pal,
        position_hex: Some("645AC8418C6496288214B40AAA82D223BE08A0C882B4B46E32C8788232C8"),
        names: ["オランダ", "Netherlands", "Niederlande", "Pays-Bas", "Países Bajos", "Paesi Bassi", "Nederland"],
    },
    CountryInfo {
        code: 95,
        regions: 13,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ニュージーランド", "New Zealand", "Neuseeland", "Nouvelle-Zélande", "Nueva Zelanda", "Nuova Zelanda", "Nieuw-Zeeland"],
    },
    CountryInfo {
        code: 96,
        regions: 5,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ノルウェー", "Norway", "Norwegen", "Norvège", "Noruega", "Norvegia", "Noorwegen"],
    },
    CountryInfo {
        code: 97,
        regions: 16,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ポーランド", "Poland", "Polen", "Pologne", "Polonia", "Polonia", "Polen"],
    },
    CountryInfo {
        code: 98,
        regions: 7,
        languages: &[English, Spanish, Portuguese],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["ポルトガル", "Portugal", "Portugal", "Portugal", "Portugal", "Portogallo", "Portugal"],
    },
    CountryInfo {
        code: 105,
        regions: 17,
        languages: &[Spanish],
        console_region: ConsoleRegion::Pal,
        position_hex: Some(
            "6E5F64E6A03C3C1EF852E65FCA739AD9A7E6B4E1C8E6EBE1641E7878503CC832AA73468C1E32A0968C28781E7832",
        ),
        names: ["スペイン", "Spain", "Spanien", "Espagne", "España", "Spagna", "Spanje"],
    },
    CountryInfo {
        code: 107,
        regions: 21,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["スウェーデン", "Sweden", "Schweden", "Suède", "Suecia", "Svezia", "Zweden"],
    },
    CountryInfo {
        code: 108,
        regions: 23,
        languages: &[German, French, Italian, Dutch],
        console_region: ConsoleRegion::Pal,
        position_hex: None,
        names: ["スイス", "Switzerland", "Schweiz", "Suisse", "Suiza", "Svizzera", "Zwitserland"],
    },
    CountryInfo {
        code: 110,
        regions: 5,
        languages: &[English],
        console_region: ConsoleRegion::Pal,
        position_hex: Some("B4B4738732E67846D71E82B4507D"),
        names: ["イギリス", "United Kingdom", "Großbritannien", "Royaume-Uni", "Reino Unido", "Regno Unito", "Verenigd Koninkrijk"],
    },
];
