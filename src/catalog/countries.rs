// Copyright (C) 2025 The phonemask Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::macros::country;

use super::CountryRecord;

/// Countries offered by the input, in picker order. Order matters for
/// shared dial codes: `US` precedes `CA` for `+1`.
pub static COUNTRIES: [CountryRecord; 51] = [
    country!("BR", "Brazil", "+55", "🇧🇷", "(##) #####-####", "(11) 99999-9999", 11),
    country!("US", "United States", "+1", "🇺🇸", "(###) ###-####", "(555) 123-4567", 10),
    country!("CA", "Canada", "+1", "🇨🇦", "(###) ###-####", "(416) 555-1234", 10),
    country!("GB", "United Kingdom", "+44", "🇬🇧", "#### ######", "7911 123456", 10),
    country!("PT", "Portugal", "+351", "🇵🇹", "### ### ###", "912 345 678", 9),
    country!("ES", "Spain", "+34", "🇪🇸", "### ## ## ##", "612 34 56 78", 9),
    country!("FR", "France", "+33", "🇫🇷", "# ## ## ## ##", "6 12 34 56 78", 9),
    country!("DE", "Germany", "+49", "🇩🇪", "### ########", "151 12345678", 11),
    country!("IT", "Italy", "+39", "🇮🇹", "### ### ####", "312 345 6789", 10),
    country!("AR", "Argentina", "+54", "🇦🇷", "## ####-####", "11 1234-5678", 10),
    country!("MX", "Mexico", "+52", "🇲🇽", "## #### ####", "55 1234 5678", 10),
    country!("CL", "Chile", "+56", "🇨🇱", "# #### ####", "9 1234 5678", 9),
    country!("CO", "Colombia", "+57", "🇨🇴", "### ### ####", "321 123 4567", 10),
    country!("PE", "Peru", "+51", "🇵🇪", "### ### ###", "912 345 678", 9),
    country!("VE", "Venezuela", "+58", "🇻🇪", "###-#######", "412-1234567", 10),
    country!("AU", "Australia", "+61", "🇦🇺", "### ### ###", "412 345 678", 9),
    country!("NZ", "New Zealand", "+64", "🇳🇿", "## ### ####", "21 123 4567", 9),
    country!("JP", "Japan", "+81", "🇯🇵", "##-####-####", "90-1234-5678", 10),
    country!("CN", "China", "+86", "🇨🇳", "### #### ####", "138 0000 0000", 11),
    country!("IN", "India", "+91", "🇮🇳", "##### #####", "98765 43210", 10),
    country!("RU", "Russia", "+7", "🇷🇺", "(###) ###-##-##", "(912) 345-67-89", 10),
    country!("ZA", "South Africa", "+27", "🇿🇦", "## ### ####", "71 123 4567", 9),
    country!("KR", "South Korea", "+82", "🇰🇷", "##-####-####", "10-1234-5678", 10),
    country!("TR", "Turkey", "+90", "🇹🇷", "### ### ## ##", "501 234 56 78", 10),
    country!("SA", "Saudi Arabia", "+966", "🇸🇦", "## ### ####", "50 123 4567", 9),
    country!("AE", "United Arab Emirates", "+971", "🇦🇪", "## ### ####", "50 123 4567", 9),
    country!("IL", "Israel", "+972", "🇮🇱", "##-###-####", "50-123-4567", 9),
    country!("EG", "Egypt", "+20", "🇪🇬", "### ### ####", "100 123 4567", 10),
    country!("NG", "Nigeria", "+234", "🇳🇬", "### ### ####", "802 123 4567", 10),
    country!("KE", "Kenya", "+254", "🇰🇪", "### ######", "712 123456", 9),
    country!("PH", "Philippines", "+63", "🇵🇭", "### ### ####", "917 123 4567", 10),
    country!("TH", "Thailand", "+66", "🇹🇭", "## ### ####", "81 234 5678", 9),
    country!("VN", "Vietnam", "+84", "🇻🇳", "## ### ####", "91 234 5678", 9),
    country!("ID", "Indonesia", "+62", "🇮🇩", "###-####-####", "812-3456-7890", 11),
    country!("MY", "Malaysia", "+60", "🇲🇾", "##-### ####", "12-345 6789", 9),
    country!("SG", "Singapore", "+65", "🇸🇬", "#### ####", "9123 4567", 8),
    country!("PL", "Poland", "+48", "🇵🇱", "### ### ###", "512 345 678", 9),
    country!("NL", "Netherlands", "+31", "🇳🇱", "# ## ## ## ##", "6 12 34 56 78", 9),
    country!("BE", "Belgium", "+32", "🇧🇪", "### ## ## ##", "470 12 34 56", 9),
    country!("SE", "Sweden", "+46", "🇸🇪", "##-### ## ##", "70-123 45 67", 9),
    country!("NO", "Norway", "+47", "🇳🇴", "### ## ###", "412 34 567", 8),
    country!("DK", "Denmark", "+45", "🇩🇰", "## ## ## ##", "20 12 34 56", 8),
    country!("FI", "Finland", "+358", "🇫🇮", "## ### ####", "41 123 4567", 9),
    country!("CH", "Switzerland", "+41", "🇨🇭", "## ### ## ##", "78 123 45 67", 9),
    country!("AT", "Austria", "+43", "🇦🇹", "### ########", "664 12345678", 11),
    country!("GR", "Greece", "+30", "🇬🇷", "### ### ####", "691 234 5678", 10),
    country!("IE", "Ireland", "+353", "🇮🇪", "## ### ####", "85 123 4567", 9),
    country!("CZ", "Czech Republic", "+420", "🇨🇿", "### ### ###", "601 234 567", 9),
    country!("RO", "Romania", "+40", "🇷🇴", "### ### ###", "712 345 678", 9),
    country!("HU", "Hungary", "+36", "🇭🇺", "## ### ####", "20 123 4567", 9),
    country!("UA", "Ukraine", "+380", "🇺🇦", "## ### ####", "50 123 4567", 9),
];
