//! Bundled station table.
//!
//! Display name and telecode pairs for the stations the tool knows
//! about. This is a curated subset of the upstream's station list
//! covering the major hubs; extend it as needed.

/// (display name, telecode) pairs.
pub(super) const STATIONS: &[(&str, &str)] = &[
    ("北京", "BJP"),
    ("北京北", "VAP"),
    ("北京东", "BOP"),
    ("北京南", "VNP"),
    ("北京西", "BXP"),
    ("上海", "SHH"),
    ("上海虹桥", "AOH"),
    ("上海南", "SNH"),
    ("上海西", "SXH"),
    ("天津", "TJP"),
    ("天津西", "TXP"),
    ("天津南", "TIP"),
    ("重庆", "CQW"),
    ("重庆北", "CUW"),
    ("广州", "GZQ"),
    ("广州东", "GGQ"),
    ("广州南", "IZQ"),
    ("深圳", "SZQ"),
    ("深圳北", "IOQ"),
    ("成都", "CDW"),
    ("成都东", "ICW"),
    ("成都南", "CNW"),
    ("南京", "NJH"),
    ("南京南", "NKH"),
    ("杭州", "HZH"),
    ("杭州东", "HGH"),
    ("武汉", "WHN"),
    ("汉口", "HKN"),
    ("武昌", "WCN"),
    ("西安", "XAY"),
    ("西安北", "EAY"),
    ("郑州", "ZZF"),
    ("郑州东", "ZAF"),
    ("长沙", "CSQ"),
    ("长沙南", "CWQ"),
    ("南昌", "NCG"),
    ("福州", "FZS"),
    ("福州南", "FYS"),
    ("厦门", "XMS"),
    ("厦门北", "XKS"),
    ("济南", "JNK"),
    ("济南西", "JGK"),
    ("青岛", "QDK"),
    ("青岛北", "QHK"),
    ("石家庄", "SJP"),
    ("太原", "TYV"),
    ("哈尔滨", "HBB"),
    ("哈尔滨西", "VAB"),
    ("长春", "CCT"),
    ("沈阳", "SYT"),
    ("沈阳北", "SBT"),
    ("大连", "DLT"),
    ("大连北", "DFT"),
    ("兰州", "LZJ"),
    ("兰州西", "LAJ"),
    ("西宁", "XNO"),
    ("银川", "YIJ"),
    ("乌鲁木齐", "WAR"),
    ("昆明", "KMM"),
    ("贵阳", "GIW"),
    ("南宁", "NNZ"),
    ("桂林", "GLZ"),
    ("桂林北", "GBZ"),
    ("柳州", "LZZ"),
    ("海口", "VUQ"),
    ("三亚", "JUQ"),
    ("合肥", "HFH"),
    ("合肥南", "ENH"),
    ("苏州", "SZH"),
    ("无锡", "WXH"),
    ("常州", "CZH"),
    ("镇江", "ZJH"),
    ("扬州", "YLH"),
    ("南通", "NUH"),
    ("徐州", "XCH"),
    ("温州南", "VRH"),
    ("宁波", "NGH"),
    ("金华", "JBH"),
    ("义乌", "YWH"),
    ("嘉兴", "JXH"),
    ("呼和浩特", "HHC"),
    ("包头", "BTC"),
    ("洛阳", "LYF"),
    ("洛阳龙门", "LLF"),
    ("开封", "KFF"),
    ("新乡", "XXF"),
    ("安阳", "AYF"),
    ("商丘", "SQF"),
    ("保定", "BDP"),
    ("唐山", "TSP"),
    ("秦皇岛", "QTP"),
    ("邯郸", "HDP"),
    ("廊坊", "LJP"),
    ("沧州", "COP"),
    ("衡水", "HSP"),
    ("邢台", "XTP"),
    ("承德", "CDP"),
    ("张家口", "ZKP"),
    ("襄阳", "XFN"),
    ("宜昌东", "HAN"),
    ("十堰", "SNN"),
    ("信阳", "XUN"),
    ("株洲", "ZZQ"),
    ("衡阳", "HYQ"),
    ("岳阳", "YYQ"),
    ("郴州", "CZQ"),
    ("怀化", "HHQ"),
    ("九江", "JJG"),
    ("赣州", "GZG"),
    ("烟台", "YAK"),
    ("潍坊", "WFK"),
    ("威海", "WKK"),
    ("绵阳", "MYW"),
    ("德阳", "DYW"),
    ("大理", "DKM"),
    ("丽江", "LHM"),
    ("拉萨", "LSO"),
    ("天水", "TSJ"),
    ("宝鸡", "BJY"),
    ("延安", "YWY"),
    ("汉中", "HOY"),
    ("大同", "DTV"),
    ("运城", "YNV"),
    ("临汾", "LFV"),
    ("齐齐哈尔", "QHX"),
    ("牡丹江", "MDB"),
    ("佳木斯", "JMB"),
    ("吉林", "JLL"),
    ("延吉", "YJL"),
    ("丹东", "DUT"),
    ("鞍山", "AST"),
    ("锦州", "JZD"),
    ("芜湖", "WHH"),
    ("安庆", "AQH"),
    ("阜阳", "FYH"),
    ("蚌埠", "BBH"),
    ("盐城", "AFH"),
    ("泰州", "UTH"),
    ("珠海", "ZHQ"),
    ("佛山", "FSQ"),
    ("惠州", "HCQ"),
    ("湛江", "ZJZ"),
];
