// Literal pin data ported from `InitPins()` in the original tool, one
// table per embedding dimension. Values for dimension 1 are pre-divided
// by 90 (degrees latitude -> [-1, 1]) and dimension 2 is pre-encoded
// through `encode_mass`, matching what the original computes inline at
// each `Pin(...)` call site.

pub(crate) const GENDER_PINS: &[(&str, f32)] = &[
    ("female", 1.0),
    ("male", -1.0),
    ("she", 1.0),
    ("he", -1.0),
    ("queen", 1.0),
    ("king", -1.0),
    ("duchess", 1.0),
    ("duke", -1.0),
    ("aunt", 1.0),
    ("uncle", -1.0),
    ("girl", 1.0),
    ("boy", -1.0),
    ("niece", 1.0),
    ("nephew", -1.0),
    ("mother", 1.0),
    ("father", -1.0),
    ("wife", 1.0),
    ("husband", -1.0),
    ("nun", 1.0),
    ("priest", -1.0),
    ("actress", 1.0),
    ("actor", -1.0),
    ("bride", 1.0),
    ("groom", -1.0),
    ("lady", 1.0),
    ("gentleman", -1.0),
    ("waitress", 1.0),
    ("waiter", -1.0),
];

pub(crate) const CITY_LATITUDE_PINS: &[(&str, f32)] = &[
    ("helsinki", 0.666667_f32),
    ("bergen", 0.666667_f32),
    ("oslo", 0.644444_f32),
    ("stockholm", 0.644444_f32),
    ("edinburgh", 0.611111_f32),
    ("copenhagen", 0.611111_f32),
    ("moscow", 0.611111_f32),
    ("hamburg", 0.588889_f32),
    ("amsterdam", 0.577778_f32),
    ("berlin", 0.577778_f32),
    ("london", 0.566667_f32),
    ("prague", 0.555556_f32),
    ("vancouver", 0.544444_f32),
    ("paris", 0.533333_f32),
    ("munich", 0.533333_f32),
    ("vienna", 0.533333_f32),
    ("budapest", 0.522222_f32),
    ("montreal", 0.5_f32),
    ("venice", 0.5_f32),
    ("toronto", 0.477778_f32),
    ("florence", 0.477778_f32),
    ("boston", 0.466667_f32),
    ("chicago", 0.455556_f32),
    ("barcelona", 0.455556_f32),
    ("rome", 0.455556_f32),
    ("istanbul", 0.455556_f32),
    ("madrid", 0.444444_f32),
    ("naples", 0.444444_f32),
    ("beijing", 0.433333_f32),
    ("athens", 0.411111_f32),
    ("seoul", 0.411111_f32),
    ("tokyo", 0.388889_f32),
    ("kyoto", 0.388889_f32),
    ("beirut", 0.366667_f32),
    ("cairo", 0.333333_f32),
    ("delhi", 0.311111_f32),
    ("miami", 0.277778_f32),
    ("taipei", 0.277778_f32),
    ("macau", 0.244444_f32),
    ("honolulu", 0.233333_f32),
    ("hanoi", 0.233333_f32),
    ("mumbai", 0.2_f32),
    ("bangkok", 0.144444_f32),
    ("caracas", 0.111111_f32),
    ("nairobi", 0.0111111_f32),
];

pub(crate) const ANIMAL_MASS_PINS: &[(&str, f32)] = &[
    ("elephant", 0.369897_f32),
    ("hippopotamus", 0.357403_f32),
    ("walrus", 0.3_f32),
    ("giraffe", 0.290309_f32),
    ("cow", 0.290309_f32),
    ("buffalo", 0.28451_f32),
    ("horse", 0.28451_f32),
    ("camel", 0.269897_f32),
    ("donkey", 0.260206_f32),
    ("bear", 0.247712_f32),
    ("boar", 0.225527_f32),
    ("lion", 0.220412_f32),
    ("gorilla", 0.214613_f32),
    ("tiger", 0.207918_f32),
    ("human", 0.18451_f32),
    ("cougar", 0.179934_f32),
    ("chimpanzee", 0.165321_f32),
    ("goat", 0.160206_f32),
    ("sheep", 0.160206_f32),
    ("dog", 0.147712_f32),
    ("bobcat", 0.0954243_f32),
    ("rat", -0.030103_f32),
    ("hamster", -0.079588_f32),
    ("gecko", -0.152288_f32),
    ("ant", -0.469897_f32),
];

pub(crate) const HAS_WHEELS_PINS: &[(&str, f32)] = &[
    ("cabbage", 0.0),
    ("grasshopper", 0.0),
    ("hornet", 0.0),
    ("peach", 0.0),
    ("donkey", 0.0),
    ("poppy", 0.0),
    ("hippo", 0.0),
    ("tarantula", 0.0),
    ("bra", 0.0),
    ("elephant", 0.0),
    ("cushion", 0.0),
    ("apple", 0.0),
    ("sheep", 0.0),
    ("tambourine", 0.0),
    ("bus", 1.0),
    ("crane", 0.0),
    ("peanut", 0.0),
    ("willow", 0.0),
    ("taxi", 1.0),
    ("flannel", 0.0),
    ("leg", 0.0),
    ("rabbit", 0.0),
    ("crab", 0.0),
    ("lemonade", 0.0),
    ("cape", 0.0),
    ("beaver", 0.0),
    ("ship", 0.0),
    ("sock", 0.0),
    ("bicycle", 1.0),
    ("tiger", 0.0),
    ("tuna", 0.0),
    ("thumb", 0.0),
    ("eagle", 0.0),
    ("sandwich", 0.0),
    ("gherkin", 0.0),
    ("sycamore", 0.0),
    ("rhubarb", 0.0),
    ("satsuma", 0.0),
    ("hyena", 0.0),
    ("caravan", 1.0),
    ("hummingbird", 0.0),
    ("trousers", 0.0),
    ("robe", 0.0),
    ("minibus", 1.0),
    ("mackerel", 0.0),
    ("apricot", 0.0),
    ("owl", 0.0),
    ("seaweed", 0.0),
    ("otter", 0.0),
    ("whisky", 0.0),
    ("dolphin", 0.0),
    ("spider", 0.0),
    ("mussel", 0.0),
    ("emu", 0.0),
    ("locust", 0.0),
    ("peacock", 0.0),
    ("ostrich", 0.0),
    ("warship", 0.0),
    ("jellyfish", 0.0),
    ("arm", 0.0),
    ("gorilla", 0.0),
    ("yoghurt", 0.0),
    ("wine", 0.0),
    ("magpie", 0.0),
    ("truck", 1.0),
    ("butter", 0.0),
    ("salmon", 0.0),
    ("camel", 0.0),
    ("scorpion", 0.0),
    ("ham", 0.0),
    ("lamb", 0.0),
    ("ambulance", 1.0),
    ("zebra", 0.0),
    ("flea", 0.0),
    ("daffodil", 0.0),
    ("pineapple", 0.0),
    ("tea", 0.0),
    ("rice", 0.0),
    ("grapefruit", 0.0),
    ("tomato", 0.0),
    ("crocodile", 0.0),
    ("coffee", 0.0),
    ("woodpecker", 0.0),
    ("clam", 0.0),
    ("sled", 0.0),
    ("buggy", 1.0),
    ("termite", 0.0),
    ("lettuce", 0.0),
    ("calf", 0.0),
    ("parsley", 0.0),
    ("flounder", 0.0),
    ("jelly", 0.0),
    ("squid", 0.0),
    ("rat", 0.0),
    ("hyacinth", 0.0),
    ("parakeet", 0.0),
    ("nightingale", 0.0),
    ("carriage", 1.0),
    ("pillow", 0.0),
    ("monkey", 0.0),
    ("moose", 0.0),
    ("scallop", 0.0),
    ("boat", 0.0),
    ("goat", 0.0),
    ("cauliflower", 0.0),
    ("motorbike", 1.0),
    ("oyster", 0.0),
    ("leopard", 0.0),
    ("buzzard", 0.0),
    ("snail", 0.0),
    ("sultana", 0.0),
    ("plum", 0.0),
    ("falcon", 0.0),
    ("cake", 0.0),
    ("herring", 0.0),
    ("ketchup", 0.0),
    ("turtle", 0.0),
    ("chocolate", 0.0),
    ("iguana", 0.0),
    ("finger", 0.0),
    ("bacon", 0.0),
    ("melon", 0.0),
    ("garlic", 0.0),
    ("watermelon", 0.0),
    ("champagne", 0.0),
    ("train", 1.0),
    ("prune", 0.0),
    ("cheetah", 0.0),
    ("ear", 0.0),
    ("alligator", 0.0),
    ("raisin", 0.0),
    ("beetle", 0.0),
    ("sugar", 0.0),
    ("walrus", 0.0),
    ("moth", 0.0),
    ("lemon", 0.0),
    ("platypus", 0.0),
    ("broccoli", 0.0),
    ("porsche", 1.0),
    ("squirrel", 0.0),
    ("toe", 0.0),
    ("jam", 0.0),
    ("shrimp", 0.0),
    ("minivan", 1.0),
    ("cloak", 0.0),
    ("lorry", 1.0),
    ("cucumber", 0.0),
    ("worm", 0.0),
    ("bike", 1.0),
    ("winch", 0.0),
    ("frog", 0.0),
    ("butterfly", 0.0),
    ("orange", 0.0),
    ("shark", 0.0),
    ("drum", 0.0),
    ("tugboat", 0.0),
    ("jacket", 0.0),
    ("raven", 0.0),
    ("shawl", 0.0),
    ("dragonfly", 0.0),
    ("cap", 0.0),
    ("scarf", 0.0),
    ("wolf", 0.0),
    ("llama", 0.0),
    ("sunflower", 0.0),
    ("turkey", 0.0),
    ("panther", 0.0),
    ("rhino", 0.0),
    ("moss", 0.0),
    ("cherry", 0.0),
    ("rattlesnake", 0.0),
    ("grape", 0.0),
    ("oak", 0.0),
    ("crayfish", 0.0),
    ("hawk", 0.0),
    ("gown", 0.0),
    ("van", 1.0),
    ("pear", 0.0),
    ("seagull", 0.0),
    ("stockings", 0.0),
    ("apron", 0.0),
    ("limousine", 1.0),
    ("carrot", 0.0),
    ("cod", 0.0),
    ("wheeler", 1.0),
    ("blueberry", 0.0),
    ("cricket", 0.0),
    ("doll", 0.0),
    ("kangaroo", 0.0),
    ("gloves", 0.0),
    ("pony", 0.0),
    ("horse", 0.0),
    ("chipmunk", 0.0),
    ("sparrow", 0.0),
    ("freighter", 0.0),
    ("cow", 0.0),
    ("pigeon", 0.0),
    ("pansy", 0.0),
    ("dress", 0.0),
    ("orchid", 0.0),
    ("partridge", 0.0),
    ("motorcycle", 1.0),
    ("soup", 0.0),
    ("foot", 0.0),
    ("pie", 0.0),
    ("milk", 0.0),
    ("rickshaw", 1.0),
    ("eel", 0.0),
    ("unicycle", 1.0),
    ("mosquito", 0.0),
    ("cart", 1.0),
    ("nut", 0.0),
    ("bean", 0.0),
    ("cockroach", 0.0),
    ("puppet", 0.0),
    ("celery", 0.0),
    ("minnow", 0.0),
    ("seal", 0.0),
    ("tulip", 0.0),
    ("lips", 0.0),
    ("marigold", 0.0),
    ("tobacco", 0.0),
    ("lime", 0.0),
    ("dates", 0.0),
    ("canary", 0.0),
    ("caterpillar", 0.0),
    ("goose", 0.0),
    ("yacht", 0.0),
    ("lily", 0.0),
    ("aeroplane", 1.0),
    ("potato", 0.0),
    ("lion", 0.0),
    ("tricycle", 1.0),
    ("banana", 0.0),
    ("birch", 0.0),
    ("bread", 0.0),
    ("scooter", 1.0),
    ("elm", 0.0),
    ("fir", 0.0),
    ("toad", 0.0),
    ("hair", 0.0),
    ("mayonnaise", 0.0),
    ("cat", 0.0),
    ("centipede", 0.0),
    ("strawberry", 0.0),
    ("radish", 0.0),
    ("trout", 0.0),
    ("starling", 0.0),
    ("onion", 0.0),
    ("tractor", 1.0),
    ("nose", 0.0),
    ("wasp", 0.0),
    ("wheelbarrow", 1.0),
    ("vessel", 0.0),
    ("skirt", 0.0),
    ("heron", 0.0),
    ("tortoise", 0.0),
    ("pig", 0.0),
    ("schooner", 0.0),
    ("octopus", 0.0),
    ("pelican", 0.0),
    ("wheelchair", 1.0),
    ("skunk", 0.0),
    ("lizard", 0.0),
    ("swan", 0.0),
    ("lobster", 0.0),
    ("hamster", 0.0),
    ("duck", 0.0),
    ("dandelion", 0.0),
    ("mushroom", 0.0),
    ("dove", 0.0),
    ("peas", 0.0),
    ("wagon", 1.0),
    ("raspberry", 0.0),
    ("kingfisher", 0.0),
    ("chestnut", 0.0),
    ("coach", 1.0),
    ("shirt", 0.0),
    ("wren", 0.0),
    ("frigate", 0.0),
    ("porcupine", 0.0),
    ("fern", 0.0),
    ("asparagus", 0.0),
    ("ant", 0.0),
    ("artichoke", 0.0),
    ("sweater", 0.0),
    ("daisy", 0.0),
    ("corn", 0.0),
    ("pumpkin", 0.0),
    ("suit", 0.0),
    ("penguin", 0.0),
    ("ox", 0.0),
    ("bear", 0.0),
    ("spinach", 0.0),
    ("eucalyptus", 0.0),
    ("flamingo", 0.0),
    ("tangerine", 0.0),
];

pub(crate) const IS_DANGEROUS_PINS: &[(&str, f32)] = &[
    ("chainsaw", 1.0),
    ("tricycle", 0.0),
    ("panther", 1.0),
    ("wolf", 1.0),
    ("grizzly", 1.0),
    ("syringe", 1.0),
    ("ball", 0.0),
    ("soup", 0.0),
    ("poison", 1.0),
    ("axe", 1.0),
    ("mop", 0.0),
    ("shovel", 0.0),
    ("giraffe", 0.0),
    ("hod", 0.0),
    ("crocodile", 1.0),
    ("crossbow", 1.0),
    ("jellyfish", 1.0),
    ("bullet", 1.0),
    ("gun", 1.0),
    ("methamphetamines", 1.0),
    ("snake", 1.0),
    ("scorpion", 1.0),
    ("hippo", 1.0),
    ("blade", 1.0),
    ("lemur", 0.0),
    ("gorillas", 1.0),
    ("rifle", 1.0),
    ("pitchfork", 1.0),
    ("glove", 0.0),
    ("warthog", 1.0),
    ("harpoon", 1.0),
    ("cleaver", 1.0),
    ("heroin", 1.0),
    ("rattlesnake", 1.0),
    ("cougar", 1.0),
    ("arrow", 1.0),
    ("puppet", 0.0),
    ("elephant", 1.0),
    ("methamphetamine", 1.0),
    ("bomb", 1.0),
    ("tigress", 1.0),
    ("valium", 1.0),
    ("sword", 1.0),
    ("porcupine", 0.0),
    ("weapon", 1.0),
    ("recorder", 0.0),
    ("motorcycle", 1.0),
    ("derringer", 1.0),
    ("antelope", 0.0),
    ("dinosaur", 1.0),
    ("firearm", 1.0),
    ("saw", 1.0),
    ("bayonet", 1.0),
    ("tiger", 1.0),
    ("doll", 0.0),
    ("methadone", 1.0),
    ("cannon", 1.0),
    ("toothbrush", 0.0),
    ("tyrannosaurus", 1.0),
    ("crayon", 0.0),
    ("rhinoceros", 1.0),
    ("cocaine", 1.0),
    ("tapir", 1.0),
    ("lions", 1.0),
    ("hoe", 0.0),
    ("whip", 1.0),
    ("helicopter", 1.0),
    ("broom", 0.0),
    ("otter", 0.0),
    ("tambourine", 0.0),
    ("jaguar", 1.0),
    ("cheetah", 1.0),
    ("steroid", 1.0),
    ("scissors", 1.0),
    ("lion", 1.0),
    ("drug", 1.0),
    ("amphetamine", 1.0),
    ("zebra", 0.0),
    ("rattle", 0.0),
    ("hyena", 1.0),
    ("alligator", 1.0),
    ("razor", 1.0),
    ("slingshot", 1.0),
    ("pistol", 1.0),
    ("viper", 1.0),
    ("blender", 0.0),
    ("goat", 0.0),
    ("tortoise", 0.0),
    ("spade", 0.0),
    ("python", 1.0),
    ("silverback", 1.0),
    ("shotgun", 1.0),
    ("toad", 0.0),
    ("rocket", 1.0),
    ("marble", 0.0),
    ("leopard", 1.0),
    ("turtle", 0.0),
    ("club", 1.0),
    ("handgun", 1.0),
    ("dromedary", 0.0),
    ("rabbit", 0.0),
    ("shark", 1.0),
    ("gazelle", 0.0),
    ("stabbed", 1.0),
    ("axes", 1.0),
    ("monkey", 0.0),
    ("narcotic", 1.0),
    ("kite", 0.0),
    ("bucket", 0.0),
    ("guenon", 0.0),
    ("balloon", 0.0),
    ("stabbing", 1.0),
    ("satchel", 0.0),
    ("spear", 1.0),
    ("plough", 1.0),
    ("camel", 0.0),
    ("knife", 1.0),
    ("hornbill", 0.0),
    ("boomerang", 1.0),
    ("scythe", 1.0),
    ("revolver", 1.0),
    ("tank", 1.0),
    ("swing", 0.0),
];
