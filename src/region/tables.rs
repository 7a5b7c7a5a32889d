//! Static region tables for UK local authority boundaries.
//!
//! Names are lowercase and cover several boundary vintages, so both
//! pre-2019 districts and their merged successors appear.

/// English unitary/district codes for London boroughs start with this
pub const LONDON_CODE_PREFIX: &str = "E09";

pub const NORTH_WEST: &[&str] = &[
    "bolton", "bury", "manchester", "oldham", "rochdale", "salford", "stockport",
    "tameside", "trafford", "wigan",
    "knowsley", "liverpool", "st. helens", "sefton", "wirral",
    "halton", "warrington",
    "cheshire east", "cheshire west and chester",
    "blackburn with darwen", "blackpool",
    "burnley", "chorley", "fylde", "hyndburn", "lancaster", "pendle",
    "preston", "ribble valley", "rossendale", "south ribble", "west lancashire", "wyre",
    "allerdale", "barrow-in-furness", "carlisle", "copeland", "eden", "south lakeland",
    "cumberland", "westmorland and furness",
];

pub const NORTH_EAST: &[&str] = &[
    "hartlepool", "middlesbrough", "redcar and cleveland", "stockton-on-tees",
    "darlington", "county durham", "durham",
    "gateshead", "newcastle upon tyne", "north tyneside", "south tyneside", "sunderland",
    "northumberland",
];

pub const YORKSHIRE_HUMBER: &[&str] = &[
    "kingston upon hull", "east riding of yorkshire", "north east lincolnshire",
    "north lincolnshire", "york",
    "barnsley", "doncaster", "rotherham", "sheffield",
    "bradford", "calderdale", "kirklees", "leeds", "wakefield",
    "craven", "hambleton", "harrogate", "richmondshire", "ryedale", "scarborough", "selby",
    "north yorkshire",
];

pub const EAST_MIDLANDS: &[&str] = &[
    "derby", "leicester", "nottingham", "rutland",
    "amber valley", "bolsover", "chesterfield", "derbyshire dales", "erewash",
    "high peak", "north east derbyshire", "south derbyshire",
    "blaby", "charnwood", "harborough", "hinckley and bosworth", "melton",
    "north west leicestershire", "oadby and wigston",
    "boston", "east lindsey", "lincoln", "north kesteven", "south holland",
    "south kesteven", "west lindsey",
    "corby", "daventry", "east northamptonshire", "kettering", "northampton",
    "south northamptonshire", "wellingborough",
    "north northamptonshire", "west northamptonshire",
    "ashfield", "bassetlaw", "broxtowe", "gedling", "mansfield", "newark and sherwood",
    "rushcliffe",
];

pub const WEST_MIDLANDS: &[&str] = &[
    "birmingham", "coventry", "dudley", "sandwell", "solihull", "walsall", "wolverhampton",
    "herefordshire", "shropshire", "stoke-on-trent", "telford and wrekin",
    "bromsgrove", "malvern hills", "redditch", "worcester", "wychavon", "wyre forest",
    "cannock chase", "east staffordshire", "lichfield", "newcastle-under-lyme",
    "south staffordshire", "stafford", "staffordshire moorlands", "tamworth",
    "north warwickshire", "nuneaton and bedworth", "rugby", "stratford-on-avon", "warwick",
];

pub const EASTERN: &[&str] = &[
    "bedford", "central bedfordshire", "luton",
    "peterborough", "cambridge", "east cambridgeshire", "fenland", "huntingdonshire",
    "south cambridgeshire",
    "basildon", "braintree", "brentwood", "castle point", "chelmsford", "colchester",
    "epping forest", "harlow", "maldon", "rochford", "southend-on-sea", "tendring",
    "thurrock", "uttlesford",
    "broxbourne", "dacorum", "east hertfordshire", "hertsmere", "north hertfordshire",
    "st albans", "stevenage", "three rivers", "watford", "welwyn hatfield",
    "breckland", "broadland", "great yarmouth", "king's lynn and west norfolk",
    "north norfolk", "norwich", "south norfolk",
    "babergh", "ipswich", "mid suffolk", "east suffolk", "west suffolk",
];

pub const SOUTH_EAST: &[&str] = &[
    "bracknell forest", "west berkshire", "reading", "slough", "windsor and maidenhead",
    "wokingham", "milton keynes", "brighton and hove", "portsmouth", "southampton",
    "isle of wight", "medway",
    "aylesbury vale", "chiltern", "south bucks", "wycombe", "buckinghamshire",
    "eastbourne", "hastings", "lewes", "rother", "wealden",
    "basingstoke and deane", "east hampshire", "eastleigh", "fareham", "gosport",
    "hart", "havant", "new forest", "rushmoor", "test valley", "winchester",
    "ashford", "canterbury", "dartford", "dover", "gravesham", "maidstone",
    "sevenoaks", "folkestone and hythe", "shepway", "swale", "thanet", "tonbridge and malling",
    "tunbridge wells",
    "cherwell", "oxford", "south oxfordshire", "vale of white horse", "west oxfordshire",
    "elmbridge", "epsom and ewell", "guildford", "mole valley", "reigate and banstead",
    "runnymede", "spelthorne", "surrey heath", "tandridge", "waverley", "woking",
    "adur", "arun", "chichester", "crawley", "horsham", "mid sussex", "worthing",
];

pub const SOUTH_WEST: &[&str] = &[
    "bath and north east somerset", "bristol", "north somerset",
    "south gloucestershire", "plymouth", "torbay", "bournemouth", "poole",
    "swindon", "cornwall", "isles of scilly", "wiltshire",
    "bournemouth, christchurch and poole", "dorset",
    "christchurch", "east dorset", "north dorset", "purbeck", "west dorset",
    "weymouth and portland",
    "cheltenham", "cotswold", "forest of dean", "gloucester", "stroud", "tewkesbury",
    "mendip", "sedgemoor", "south somerset", "somerset west and taunton",
    "east devon", "exeter", "mid devon", "north devon", "south hams", "teignbridge",
    "torridge", "west devon",
];

/// Region ids paired with their district name list, in output order
pub const NAMED_REGIONS: &[(&str, &[&str])] = &[
    ("north-east", NORTH_EAST),
    ("north-west", NORTH_WEST),
    ("yorkshire-humber", YORKSHIRE_HUMBER),
    ("east-midlands", EAST_MIDLANDS),
    ("midlands", WEST_MIDLANDS),
    ("eastern", EASTERN),
    ("south-east", SOUTH_EAST),
    ("south-west", SOUTH_WEST),
];

/// European Electoral Region names (`EER13NM`) to region ids
pub const EER_REGIONS: &[(&str, &str)] = &[
    ("North East", "north-east"),
    ("North West", "north-west"),
    ("Yorkshire and The Humber", "yorkshire-humber"),
    ("East Midlands", "east-midlands"),
    ("West Midlands", "midlands"),
    ("Eastern", "eastern"),
    ("London", "london"),
    ("South East", "south-east"),
    ("South West", "south-west"),
];

pub const EER_NAME_KEY: &str = "EER13NM";
