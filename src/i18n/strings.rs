//! Message tables for every supported language.
//!
//! English is the reference table. Hindi and Marathi must carry every
//! English key; `tests::every_key_translated` enforces it.

pub(super) const EN: &[(&str, &str)] = &[
    (
        "language_prompt",
        "🌾 Welcome to AgriIndia Assistant!\n\nPlease choose your language / कृपया भाषा चुनें / कृपया भाषा निवडा:\n1. English\n2. हिंदी\n3. मराठी",
    ),
    (
        "main_menu",
        "🌾 AgriIndia Assistant\n\nReply with a number:\n1. Crop information\n2. Minimum support price (MSP)\n3. Government subsidies\n4. Farm loans\n5. Crop insurance\n0. Exit",
    ),
    (
        "crop_menu",
        "Select crop category:\n1. Kharif crops\n2. Rabi crops\n3. Cash crops\n4. Fruit crops\n5. Search crop by name",
    ),
    ("category_kharif", "Kharif"),
    ("category_rabi", "Rabi"),
    ("category_cash", "Cash"),
    ("category_fruit", "Fruit"),
    ("category_list_heading", "{category} crops:"),
    ("no_crops_in_category", "No crops found in {category} category."),
    ("list_footer", "Reply with a number to see details."),
    ("nav_footer", "Send menu for main menu, 0 to exit."),
    ("search_prompt", "Send the crop name (example: Wheat, Mango, Cotton)."),
    ("crop_not_found", "Crop \"{name}\" not found."),
    ("back_to_menu_hint", "Reply menu for main menu."),
    ("crop_heading", "Crop: {name}"),
    (
        "crop_info_prompt",
        "Select information type:\n1. Fertilizer schedule\n2. Diseases & pests",
    ),
    ("label_season", "Season"),
    ("label_sowing", "Sowing/Planting"),
    ("label_harvesting", "Harvesting"),
    ("label_yield", "Expected yield (quintals/acre)"),
    ("label_min_price", "Minimum price (₹/quintal)"),
    ("not_available", "Not available"),
    ("fertilizer_heading", "Fertilizer schedule for {name}:"),
    ("disease_heading", "Diseases & pests of {name}:"),
    ("view_footer", "1. Back to crop options"),
    ("module_msp", "Minimum Support Price"),
    ("module_subsidy", "Government Subsidies"),
    ("module_loan", "Farm Loans"),
    ("module_insurance", "Crop Insurance"),
    ("module_list_heading", "{module}:"),
    ("no_module_records", "No records found."),
    ("module_detail_footer", "1. Back to list"),
    ("invalid_selection", "Invalid selection. Please reply with a number from the list."),
    ("invalid_option", "Invalid option. Please choose from the menu."),
    (
        "generic_error",
        "Something went wrong. Please try again or send 0 to restart.",
    ),
    (
        "goodbye",
        "Thank you for using AgriIndia Assistant. Send any message to start again.",
    ),
    ("field_name", "Scheme"),
    ("field_season_year", "Season/Year"),
    ("field_amount_per_quintal", "Amount (₹/quintal)"),
    ("field_procurement_agency", "Procurement Agency"),
    ("field_eligibility", "Eligibility"),
    ("field_benefit", "Benefit"),
    ("field_how_to_apply", "How to Apply"),
    ("field_documents_required", "Documents Required"),
    ("field_website", "Website"),
    ("field_provider", "Provider"),
    ("field_interest_rate", "Interest Rate"),
    ("field_max_amount", "Maximum Amount"),
    ("field_repayment", "Repayment"),
    ("field_coverage", "Coverage"),
    ("field_premium_rates", "Premium Rates"),
    ("field_claim_process", "Claim Process"),
    ("field_helpline", "Helpline"),
    ("field_notes", "Notes"),
    ("field_item", "Item {index}"),
];

pub(super) const HI: &[(&str, &str)] = &[
    (
        "language_prompt",
        "🌾 Welcome to AgriIndia Assistant!\n\nPlease choose your language / कृपया भाषा चुनें / कृपया भाषा निवडा:\n1. English\n2. हिंदी\n3. मराठी",
    ),
    (
        "main_menu",
        "🌾 एग्रीइंडिया सहायक\n\nएक संख्या भेजें:\n1. फसल जानकारी\n2. न्यूनतम समर्थन मूल्य (MSP)\n3. सरकारी सब्सिडी\n4. कृषि ऋण\n5. फसल बीमा\n0. बाहर निकलें",
    ),
    (
        "crop_menu",
        "फसल श्रेणी चुनें:\n1. खरीफ फसलें\n2. रबी फसलें\n3. नकदी फसलें\n4. फल फसलें\n5. नाम से फसल खोजें",
    ),
    ("category_kharif", "खरीफ"),
    ("category_rabi", "रबी"),
    ("category_cash", "नकदी"),
    ("category_fruit", "फल"),
    ("category_list_heading", "{category} फसलें:"),
    ("no_crops_in_category", "{category} श्रेणी में कोई फसल नहीं मिली।"),
    ("list_footer", "विवरण देखने के लिए संख्या भेजें।"),
    ("nav_footer", "मुख्य मेनू के लिए menu भेजें, बाहर निकलने के लिए 0।"),
    ("search_prompt", "फसल का नाम भेजें (उदाहरण: Wheat, Mango, Cotton)।"),
    ("crop_not_found", "फसल \"{name}\" नहीं मिली।"),
    ("back_to_menu_hint", "मुख्य मेनू के लिए menu भेजें।"),
    ("crop_heading", "फसल: {name}"),
    (
        "crop_info_prompt",
        "जानकारी का प्रकार चुनें:\n1. उर्वरक अनुसूची\n2. रोग और कीट",
    ),
    ("label_season", "मौसम"),
    ("label_sowing", "बुवाई/रोपण"),
    ("label_harvesting", "कटाई"),
    ("label_yield", "अपेक्षित उपज (क्विंटल/एकड़)"),
    ("label_min_price", "न्यूनतम मूल्य (₹/क्विंटल)"),
    ("not_available", "उपलब्ध नहीं"),
    ("fertilizer_heading", "{name} के लिए उर्वरक अनुसूची:"),
    ("disease_heading", "{name} के रोग और कीट:"),
    ("view_footer", "1. फसल विकल्पों पर वापस"),
    ("module_msp", "न्यूनतम समर्थन मूल्य"),
    ("module_subsidy", "सरकारी सब्सिडी"),
    ("module_loan", "कृषि ऋण"),
    ("module_insurance", "फसल बीमा"),
    ("module_list_heading", "{module}:"),
    ("no_module_records", "कोई रिकॉर्ड नहीं मिला।"),
    ("module_detail_footer", "1. सूची पर वापस"),
    ("invalid_selection", "अमान्य चयन। कृपया सूची में से एक संख्या भेजें।"),
    ("invalid_option", "अमान्य विकल्प। कृपया मेनू में से चुनें।"),
    (
        "generic_error",
        "कुछ गलत हो गया। कृपया फिर से प्रयास करें या फिर से शुरू करने के लिए 0 भेजें।",
    ),
    (
        "goodbye",
        "एग्रीइंडिया सहायक का उपयोग करने के लिए धन्यवाद। फिर से शुरू करने के लिए कोई भी संदेश भेजें।",
    ),
    ("field_name", "योजना"),
    ("field_season_year", "मौसम/वर्ष"),
    ("field_amount_per_quintal", "राशि (₹/क्विंटल)"),
    ("field_procurement_agency", "खरीद एजेंसी"),
    ("field_eligibility", "पात्रता"),
    ("field_benefit", "लाभ"),
    ("field_how_to_apply", "आवेदन कैसे करें"),
    ("field_documents_required", "आवश्यक दस्तावेज"),
    ("field_website", "वेबसाइट"),
    ("field_provider", "प्रदाता"),
    ("field_interest_rate", "ब्याज दर"),
    ("field_max_amount", "अधिकतम राशि"),
    ("field_repayment", "चुकौती"),
    ("field_coverage", "कवरेज"),
    ("field_premium_rates", "प्रीमियम दरें"),
    ("field_claim_process", "दावा प्रक्रिया"),
    ("field_helpline", "हेल्पलाइन"),
    ("field_notes", "टिप्पणी"),
    ("field_item", "मद {index}"),
];

pub(super) const MR: &[(&str, &str)] = &[
    (
        "language_prompt",
        "🌾 Welcome to AgriIndia Assistant!\n\nPlease choose your language / कृपया भाषा चुनें / कृपया भाषा निवडा:\n1. English\n2. हिंदी\n3. मराठी",
    ),
    (
        "main_menu",
        "🌾 अ‍ॅग्रीइंडिया सहाय्यक\n\nएक क्रमांक पाठवा:\n1. पीक माहिती\n2. किमान आधारभूत किंमत (MSP)\n3. शासकीय अनुदान\n4. शेती कर्ज\n5. पीक विमा\n0. बाहेर पडा",
    ),
    (
        "crop_menu",
        "पीक प्रकार निवडा:\n1. खरीप पिके\n2. रबी पिके\n3. नगदी पिके\n4. फळ पिके\n5. नावाने पीक शोधा",
    ),
    ("category_kharif", "खरीप"),
    ("category_rabi", "रबी"),
    ("category_cash", "नगदी"),
    ("category_fruit", "फळ"),
    ("category_list_heading", "{category} पिके:"),
    ("no_crops_in_category", "{category} प्रकारात पीक सापडले नाही."),
    ("list_footer", "तपशील पाहण्यासाठी क्रमांक पाठवा."),
    ("nav_footer", "मुख्य मेनूसाठी menu पाठवा, बाहेर पडण्यासाठी 0."),
    ("search_prompt", "पिकाचे नाव पाठवा (उदाहरण: Wheat, Mango, Cotton)."),
    ("crop_not_found", "पीक \"{name}\" सापडले नाही."),
    ("back_to_menu_hint", "मुख्य मेनूसाठी menu पाठवा."),
    ("crop_heading", "पीक: {name}"),
    (
        "crop_info_prompt",
        "माहितीचा प्रकार निवडा:\n1. खत वेळापत्रक\n2. रोग व कीड",
    ),
    ("label_season", "हंगाम"),
    ("label_sowing", "पेरणी/लागवड"),
    ("label_harvesting", "काढणी"),
    ("label_yield", "अपेक्षित उत्पादन (क्विंटल/एकर)"),
    ("label_min_price", "किमान किंमत (₹/क्विंटल)"),
    ("not_available", "उपलब्ध नाही"),
    ("fertilizer_heading", "{name} साठी खत वेळापत्रक:"),
    ("disease_heading", "{name} चे रोग व कीड:"),
    ("view_footer", "1. पीक पर्यायांकडे परत"),
    ("module_msp", "किमान आधारभूत किंमत"),
    ("module_subsidy", "शासकीय अनुदान"),
    ("module_loan", "शेती कर्ज"),
    ("module_insurance", "पीक विमा"),
    ("module_list_heading", "{module}:"),
    ("no_module_records", "नोंदी सापडल्या नाहीत."),
    ("module_detail_footer", "1. यादीकडे परत"),
    ("invalid_selection", "अवैध निवड. कृपया यादीतील क्रमांक पाठवा."),
    ("invalid_option", "अवैध पर्याय. कृपया मेनूमधून निवडा."),
    (
        "generic_error",
        "काहीतरी चुकले. कृपया पुन्हा प्रयत्न करा किंवा पुन्हा सुरू करण्यासाठी 0 पाठवा.",
    ),
    (
        "goodbye",
        "अ‍ॅग्रीइंडिया सहाय्यक वापरल्याबद्दल धन्यवाद. पुन्हा सुरू करण्यासाठी कोणताही संदेश पाठवा.",
    ),
    ("field_name", "योजना"),
    ("field_season_year", "हंगाम/वर्ष"),
    ("field_amount_per_quintal", "रक्कम (₹/क्विंटल)"),
    ("field_procurement_agency", "खरेदी संस्था"),
    ("field_eligibility", "पात्रता"),
    ("field_benefit", "लाभ"),
    ("field_how_to_apply", "अर्ज कसा करावा"),
    ("field_documents_required", "आवश्यक कागदपत्रे"),
    ("field_website", "संकेतस्थळ"),
    ("field_provider", "पुरवठादार"),
    ("field_interest_rate", "व्याज दर"),
    ("field_max_amount", "कमाल रक्कम"),
    ("field_repayment", "परतफेड"),
    ("field_coverage", "संरक्षण"),
    ("field_premium_rates", "हप्ता दर"),
    ("field_claim_process", "दावा प्रक्रिया"),
    ("field_helpline", "हेल्पलाइन"),
    ("field_notes", "टीप"),
    ("field_item", "बाब {index}"),
];
