//! Hard-coded coin distribution addresses and their unlock schedule.
//!
//! The total supply is split evenly across 100 distribution addresses. The
//! first [`INITIAL_UNLOCKED_COUNT`] are spendable from genesis; the remainder
//! unlock at [`UNLOCK_ADDRESS_RATE`] per [`UNLOCK_TIME_INTERVAL`] once the
//! initial allocation is exhausted. The unlock timer is enabled manually by
//! governance, so the locked/unlocked split here is the genesis split.

use crate::crypto::Address;
use std::collections::HashSet;

/// Maximum coin supply.
pub const MAX_COIN_SUPPLY: u64 = 100_000_000;

/// Number of distribution addresses.
pub const DISTRIBUTION_ADDRESSES_TOTAL: u64 = 100;

/// Coins allocated to each distribution address at genesis.
pub const DISTRIBUTION_ADDRESS_INITIAL_BALANCE: u64 =
    MAX_COIN_SUPPLY / DISTRIBUTION_ADDRESSES_TOTAL;

/// Initial number of unlocked addresses.
pub const INITIAL_UNLOCKED_COUNT: u64 = 25;

/// Number of addresses unlocked per unlock time interval.
pub const UNLOCK_ADDRESS_RATE: u64 = 5;

/// Unlock time interval in seconds (1 year).
pub const UNLOCK_TIME_INTERVAL: u64 = 60 * 60 * 24 * 365;

// The supply must split evenly across the distribution addresses.
const _: () = assert!(MAX_COIN_SUPPLY % DISTRIBUTION_ADDRESSES_TOTAL == 0);

/// Returns the hard-coded distribution addresses.
pub fn distribution_addresses() -> Vec<Address> {
    DISTRIBUTION_ADDRESSES.iter().map(|s| parse(s)).collect()
}

/// Returns distribution addresses that are unlocked, i.e. have spendable
/// outputs.
pub fn unlocked_distribution_addresses() -> Vec<Address> {
    DISTRIBUTION_ADDRESSES[..INITIAL_UNLOCKED_COUNT as usize]
        .iter()
        .map(|s| parse(s))
        .collect()
}

/// Returns distribution addresses that are locked, i.e. have unspendable
/// outputs.
pub fn locked_distribution_addresses() -> Vec<Address> {
    DISTRIBUTION_ADDRESSES[INITIAL_UNLOCKED_COUNT as usize..]
        .iter()
        .map(|s| parse(s))
        .collect()
}

/// Returns true if any of the given input owner addresses belongs to the
/// locked distribution subset.
pub fn spends_locked_output(input_owners: &[Address]) -> bool {
    let locked: HashSet<Address> = locked_distribution_addresses().into_iter().collect();
    input_owners.iter().any(|a| locked.contains(a))
}

fn parse(s: &str) -> Address {
    Address::from_hex(s).expect("hard-coded distribution address is valid hex")
}

static DISTRIBUTION_ADDRESSES: [&str; DISTRIBUTION_ADDRESSES_TOTAL as usize] = [
    "e425b2bd8a3c458b90cef1af8641aa32656d907f",
    "49d4c0d27f79cd29c75284598186bfcfce9dbc7f",
    "b4936931fb1a1963b35201e636de5d0b4c5f2a6d",
    "7404cba368590ed26300edcf7313b4ed73f75d2f",
    "84a7190495b223f4afb148405eb4a5258960c8b9",
    "a323fb09699b4ce06ccd4e83634e0485a36a630f",
    "5d8290f26cd2d2f944185f0675e77f054db405bd",
    "251367382459139d837ed9405efe6efad44343e2",
    "318b5277d0518781326addfc33e1bdd56ba8155f",
    "4608757c8e888189c4f5bb99da5661f08472bdc3",
    "6420132e7670b9448a88e76736eee14462ebfe7f",
    "18be55963e4f606add681b2956f5d58febb979b4",
    "94d045e131cd6d0326b29f899a7d4fb0b38cae5e",
    "4aa35aa0faabf9e619ba0e90c489689be3121a37",
    "bdfe68a66679316a082409c9fa5b0c95f5b70760",
    "0e1790019810a95307c174c556092ca91c5c8b86",
    "6df02bb32ba4371b01b790b4ff48ffe14ce465f9",
    "630feb2d1d8892cf99e2dde75cff99cf548e47e9",
    "0c3f7d5460486c3cbfad2da1410f2cae01772117",
    "44bf9f2e9cedf9d1315daa8e80bb03f79b432c97",
    "dc3148a0d1a70f735c53adb9c96aace14c1a7cf6",
    "b2d9e93780f1fc09e7a7de1b2b4708ce5e4351e2",
    "a660db1a0b9066cc892aa2b569f47640d1144eba",
    "d16ab6257c7c964a58cbe862fbb842a73e0e71a1",
    "b1475e11c01c007e16c825142b80b4bc281a89c0",
    "ea5a428667dc56a80fada8632eda5b69aadddc3b",
    "22a66e607a740d687abe3c1007389b46a3523435",
    "7a89ca160864ef40e5009d73f0c2e7888c897cb3",
    "2e634fdce2e1ac9c7ffcc35991f2936d8f559d54",
    "09cbabadce7491716c39d8aec8282e64debdac00",
    "715b02fd0596a81c40aaa496fc756c98c192a244",
    "fc564fc4615fcdd48383291ac574f69aaf1a5a05",
    "72310dea43799e625dcb46e8d800f15128bf0258",
    "555ef02b0d99decd92b18ae46503caa899126f62",
    "a28bb4294f0640167b1d80d193cc3f7ddb3f81a5",
    "8364a5f25840c1e4a7c5723217f4dd12d0718058",
    "6e94bd0885533846ac0cfb4c95138736900a4ec9",
    "3082be0af26f571455c3d1b719f5633a280633a2",
    "930c4bea471a66e11ee16754da2112b9646cc512",
    "7cef4225a4fa23fe4e93be7b6418b45fccb0a43f",
    "339aba3df67dc09c2d7edf13c3cbe473ea10e966",
    "6bdee4329d444665a199be6e6f37e34848679e2e",
    "f81d7e18ebdfdaa9192d8085054892705dddcebe",
    "33634bc5fa86b92e3e950fb6030631c54fd99d1f",
    "7777ee8480747b4123ae81d7890161174ed043eb",
    "1f480e1a1879223d31bebf3d1dde9e7b8c12f38c",
    "0daca743ee0ec13c39600312d5a2c26851cc9eb6",
    "e5701f20f06fd1f3f425d265b1f4d7d26bcfd707",
    "d267dab3d75876e1550a0178df7c431a05886df3",
    "432de36bb6782e28cb16461b6bc51f7c4463f359",
    "f0008bf1ef8056199630f9eb72d260797e05a56e",
    "bce929ba1d2792cae293200d5e1bced4ed4a48cb",
    "2a89dee6ab541e5f3b9d3259f1279baeb0d00dd6",
    "fd8243067bfb9b76977623d081123d42305540e3",
    "9fae1ceeee48385d4590f8967d107a8099b4b88e",
    "485f048abe378c068152e8d0e13e2c6fe1db82b8",
    "90ca74997a9f889b21cd82419552a7013dbfcef8",
    "e554ab1f51ca6e5f1aaeb279d94f71b56a6da5cb",
    "36292906ec7d8973dbb55ed57cbcef05fa64c36b",
    "81ec88850318d08af01872e9f585c9584a304464",
    "4aed1a951a888fcabe4eabf250c330f7a47eeb49",
    "26296ab85624ab1b7c9dbdd4faa367a5fdcf9455",
    "d9d2fc50fc4381797f2de9950db06f598b0c17da",
    "07dde7059cd56a835f16390cc7fd8e66d507c4e5",
    "1a94771a7fc6397a193cece43af84d28c0014e2d",
    "b4bfbcc5eb19df716f402ffc0c8aca83fde5e803",
    "7a46dfad24bad0cfc524c8fa8f7c49657dd679e0",
    "072905949e22e4038ff33658cc8869e5992be077",
    "b11dd87074028b69cd398829f1f21d237bebe25b",
    "d886ff8213cfd517f7360e5639aba716531dab01",
    "fb9323d1e2513ee528d9c6550d1056b28b946922",
    "47d0100072bd9c8c021a3412c686ca9a0bc8b18a",
    "e6eefa227e332fd5cb633806a9408b2a3b2d72e9",
    "17aeeccb61ec4009c52deed4fee902bc7dd2a6b7",
    "de0e2312f47eff17ffca5064323316e6038a90f0",
    "57a67d14dfafd79b24d1b2d8f3515f58cca8608d",
    "c1c16ef77603c8fe98372b312b1723744052904b",
    "0c0b21166867818554ec19e1d49dfd58e5cc2fa6",
    "8652541ea6474d2a29f2f7bb5f8951185ade4353",
    "b059eac3f4edc1032fa78ab8836a976ae568e25b",
    "0ec9922e5e39ca1530d9154cf32e8b4e3c99cb9f",
    "3d80e8044b69c21666699f19f91c9f42f49f44a0",
    "2ae105828f52532e8a9844f14cd4d872a273642e",
    "ae9770d90480db57a252c106e5125a3f875c088c",
    "47673033c9970ea972b52b05620635875ba14a15",
    "91dd426baa5edfc2accffac0dda0f1e317745def",
    "6d8e33603fda9433060e6c98605cc4ba2bffbd8a",
    "625f8faf8c1f04daa117a6c305c024652564085f",
    "e60ca116820dfb984371de3651283c82fe6684bb",
    "6ff22701023e0c89bdd177d6ffd50739bc876493",
    "82d0745bef066ab790b5fdbf347ebcbc0058aff7",
    "8ddb8367737c57b168ecc04ff9067b57583abb19",
    "365ad9019e0aa9e3e8b5861bd584ddb218020904",
    "0c247b31ffc379823981a676b8b3e45972f25559",
    "8ab80d0089c4611af825def9550c6744595d9630",
    "472f33117251d3d5a639f6d0425427b15ada0fc9",
    "7a46ad06d4cf2d0edc56d1d56bd2b97fce3490c3",
    "9c474ecbbe3b7dfe741f5710f2cc4c93ce9b199f",
    "f9735776e57f99797993adfcef82f018cee07cf1",
    "fb4e9de5f4fc64c7a36baa191b65ab9e47635764",
];
