//! Compiled-in reference tables for vehicle registrations.
//!
//! Both tables are sorted by key so lookups are a binary search over static
//! data. Nothing here is configurable at runtime.

/// Two-letter region code to state / union territory name.
pub static REGIONS: &[(&str, &str)] = &[
    ("AN", "Andaman & Nicobar Islands"),
    ("AP", "Andhra Pradesh"),
    ("AR", "Arunachal Pradesh"),
    ("AS", "Assam"),
    ("BR", "Bihar"),
    ("CG", "Chhattisgarh"),
    ("CH", "Chandigarh"),
    ("DD", "Daman & Diu"),
    ("DH", "Dadra & Nagar Haveli"),
    ("DL", "Delhi"),
    ("GA", "Goa"),
    ("GJ", "Gujarat"),
    ("HP", "Himachal Pradesh"),
    ("HR", "Haryana"),
    ("JH", "Jharkhand"),
    ("KA", "Karnataka"),
    ("KL", "Kerala"),
    ("LD", "Lakshadweep"),
    ("MH", "Maharashtra"),
    ("ML", "Meghalaya"),
    ("MN", "Manipur"),
    ("MP", "Madhya Pradesh"),
    ("MZ", "Mizoram"),
    ("NL", "Nagaland"),
    ("OD", "Odisha"),
    ("PB", "Punjab"),
    ("PY", "Puducherry"),
    ("RJ", "Rajasthan"),
    ("SK", "Sikkim"),
    ("TG", "Telangana"),
    ("TN", "Tamil Nadu"),
    ("TR", "Tripura"),
    ("UK", "Uttarakhand"),
    ("UP", "Uttar Pradesh"),
    ("WB", "West Bengal"),
];

/// Office code (region + zero-padded district) to RTO office name.
pub static OFFICES: &[(&str, &str)] = &[
    ("DL01", "Delhi Central RTO"),
    ("DL02", "Delhi West RTO"),
    ("DL03", "Delhi East RTO"),
    ("DL04", "Delhi South RTO"),
    ("DL05", "Delhi North RTO"),
    ("DL06", "Rohini RTO"),
    ("DL07", "New Delhi RTO"),
    ("DL08", "Dwarka RTO"),
    ("DL09", "Outer Delhi RTO"),
    ("DL10", "Shahdara RTO"),
    ("DL11", "South West Delhi RTO"),
    ("DL12", "North West Delhi RTO"),
    ("DL13", "North East Delhi RTO"),
    ("DL14", "South East Delhi RTO"),
    ("KA01", "Bangalore Central RTO"),
    ("KA02", "Bangalore North RTO"),
    ("KA03", "Bangalore South RTO"),
    ("KA04", "Bangalore East RTO"),
    ("KA05", "Bangalore West RTO"),
    ("KA06", "Tumkur RTO"),
    ("KA07", "Mysore RTO"),
    ("KA08", "Bellary RTO"),
    ("KA09", "Mangalore RTO"),
    ("KA10", "Hubli RTO"),
    ("KA11", "Gulbarga RTO"),
    ("KA12", "Belgaum RTO"),
    ("KA51", "BBMP East RTO"),
    ("KA52", "BBMP West RTO"),
    ("KA53", "BBMP North RTO"),
    ("MH01", "Mumbai Central RTO"),
    ("MH02", "Mumbai West RTO"),
    ("MH03", "Mumbai East RTO"),
    ("MH04", "Mumbai South RTO"),
    ("MH05", "Thane RTO"),
    ("MH06", "Raigad RTO"),
    ("MH07", "Ratnagiri RTO"),
    ("MH08", "Kolhapur RTO"),
    ("MH09", "Pune RTO"),
    ("MH10", "Sangli RTO"),
    ("MH11", "Solapur RTO"),
    ("MH12", "Aurangabad RTO"),
    ("MH13", "Nashik RTO"),
    ("MH14", "Dhule RTO"),
    ("MH15", "Jalgaon RTO"),
    ("MH16", "Nagpur Central RTO"),
    ("MH17", "Nagpur East RTO"),
    ("MH18", "Bhandara RTO"),
    ("MH19", "Amravati RTO"),
    ("MH20", "Buldhana RTO"),
    ("MH21", "Akola RTO"),
    ("MH22", "Washim RTO"),
    ("MH23", "Yavatmal RTO"),
    ("MH31", "Chandrapur RTO"),
    ("MH43", "Pune East RTO"),
    ("MH46", "Satara RTO"),
    ("MH47", "Nanded RTO"),
    ("TN01", "Chennai Central RTO"),
    ("TN02", "Chennai North RTO"),
    ("TN03", "Chennai South RTO"),
    ("TN04", "Chennai West RTO"),
    ("TN05", "Chennai East RTO"),
    ("TN06", "Thiruvallur RTO"),
    ("TN07", "Kanchipuram RTO"),
    ("TN08", "Vellore RTO"),
    ("TN09", "Tiruvannamalai RTO"),
    ("TN10", "Villupuram RTO"),
    ("TN11", "Cuddalore RTO"),
    ("TN12", "Chidambaram RTO"),
    ("UP01", "Agra RTO"),
    ("UP02", "Aligarh RTO"),
    ("UP03", "Allahabad RTO"),
    ("UP04", "Ambedkar Nagar RTO"),
    ("UP05", "Amethi RTO"),
    ("UP06", "Amroha RTO"),
    ("UP07", "Auraiya RTO"),
    ("UP08", "Azamgarh RTO"),
    ("UP09", "Baghpat RTO"),
    ("UP10", "Bahraich RTO"),
    ("UP11", "Ballia RTO"),
    ("UP12", "Balrampur RTO"),
    ("UP13", "Banda RTO"),
    ("UP14", "Barabanki RTO"),
    ("UP15", "Bareilly RTO"),
    ("UP16", "Basti RTO"),
    ("UP17", "Bhadohi RTO"),
    ("UP18", "Bijnor RTO"),
    ("UP19", "Budaun RTO"),
    ("UP20", "Bulandshahr RTO"),
    ("UP21", "Chandauli RTO"),
    ("UP22", "Chitrakoot RTO"),
    ("UP23", "Deoria RTO"),
    ("UP24", "Etah RTO"),
    ("UP25", "Etawah RTO"),
    ("UP26", "Faizabad RTO"),
    ("UP27", "Farrukhabad RTO"),
    ("UP28", "Fatehpur RTO"),
    ("UP29", "Firozabad RTO"),
    ("UP30", "Gautam Buddha Nagar RTO"),
    ("UP31", "Ghaziabad RTO"),
    ("UP32", "Ghazipur RTO"),
    ("UP33", "Gonda RTO"),
    ("UP34", "Gorakhpur RTO"),
    ("UP35", "Hamirpur RTO"),
    ("UP36", "Hapur RTO"),
    ("UP37", "Hardoi RTO"),
    ("UP38", "Hathras RTO"),
    ("UP39", "Jalaun RTO"),
    ("UP40", "Jaunpur RTO"),
    ("UP41", "Jhansi RTO"),
    ("UP42", "Kannauj RTO"),
    ("UP43", "Kanpur Dehat RTO"),
    ("UP44", "Kanpur Nagar RTO"),
    ("UP45", "Kasganj RTO"),
    ("UP46", "Kaushambi RTO"),
    ("UP47", "Kheri RTO"),
    ("UP48", "Kushinagar RTO"),
    ("UP49", "Lalitpur RTO"),
    ("UP50", "Lucknow RTO"),
    ("UP51", "Maharajganj RTO"),
    ("UP52", "Mahoba RTO"),
    ("UP53", "Mainpuri RTO"),
    ("UP54", "Mathura RTO"),
    ("UP55", "Mau RTO"),
    ("UP56", "Meerut RTO"),
    ("UP57", "Mirzapur RTO"),
    ("UP58", "Moradabad RTO"),
    ("UP59", "Muzaffarnagar RTO"),
    ("UP60", "Pilibhit RTO"),
    ("UP61", "Pratapgarh RTO"),
    ("UP62", "Raebareli RTO"),
    ("UP63", "Rampur RTO"),
    ("UP64", "Saharanpur RTO"),
    ("UP65", "Sambhal RTO"),
    ("UP66", "Sant Kabir Nagar RTO"),
    ("UP67", "Shahjahanpur RTO"),
    ("UP68", "Shamli RTO"),
    ("UP69", "Shravasti RTO"),
    ("UP70", "Siddharthnagar RTO"),
    ("UP71", "Sitapur RTO"),
    ("UP72", "Sonbhadra RTO"),
    ("UP73", "Sultanpur RTO"),
    ("UP74", "Unnao RTO"),
    ("UP75", "Varanasi RTO"),
    ("WB01", "Kolkata Central RTO"),
    ("WB02", "Kolkata South RTO"),
    ("WB03", "Kolkata North RTO"),
    ("WB04", "Howrah RTO"),
    ("WB05", "Hooghly RTO"),
    ("WB06", "24 Parganas North RTO"),
    ("WB07", "24 Parganas South RTO"),
    ("WB08", "Nadia RTO"),
    ("WB09", "Murshidabad RTO"),
    ("WB10", "Birbhum RTO"),
    ("WB11", "Burdwan East RTO"),
    ("WB12", "Burdwan West RTO"),
    ("WB13", "Malda RTO"),
    ("WB14", "Dinajpur North RTO"),
    ("WB15", "Dinajpur South RTO"),
    ("WB16", "Jalpaiguri RTO"),
    ("WB17", "Darjeeling RTO"),
    ("WB18", "Cooch Behar RTO"),
    ("WB19", "Alipurduar RTO"),
    ("WB20", "Kalimpong RTO"),
    ("WB21", "Bankura RTO"),
    ("WB22", "Purulia RTO"),
    ("WB23", "Paschim Medinipur RTO"),
    ("WB24", "Purba Medinipur RTO"),
    ("WB25", "Jhargram RTO"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(code, _)| (*code).cmp(key))
        .ok()
        .map(|index| table[index].1)
}

pub fn region_name(region_code: &str) -> Option<&'static str> {
    lookup(REGIONS, region_code)
}

pub fn office_name(office_code: &str) -> Option<&'static str> {
    lookup(OFFICES, office_code)
}
