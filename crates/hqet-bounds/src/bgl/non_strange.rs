//! z-expansion coefficients of the non-strange sector, `B(*) -> D(*)`.
//!
//! Each entry is `[a_0, a_1, a_2]` as a polynomial in `alpha_s / pi`, the
//! power-correction parameters and the zero-recoil Isgur-Wise inputs.

use super::{BglFormFactor, SectorInputs};

#[rustfmt::skip]
pub(super) fn coefficients(ff: BglFormFactor, x: &SectorInputs) -> [f64; 3] {
    let (a_s, eb, ec) = (x.alpha_s, x.eps_b, x.eps_c);
    let ec2 = ec * ec;
    let (xi1, xi2) = (x.xi_p, x.xi_pp);
    let (chi2, chi2p) = (x.chi2, x.chi2_p);
    let (chi3p, chi3pp) = (x.chi3_p, x.chi3_pp);
    let (eta, etap, etapp) = (x.eta, x.eta_p, x.eta_pp);
    let [l1, l2, l3, l4, l5, l6] = x.l;
    let [l1p, l2p, l3p, l4p, l5p, l6p] = x.l_p;

    match ff {
        BglFormFactor::V1 => [
            0.008703312831206973 + 0.0032729575259871553 * a_s - 0.0041554234514795205 * eb
                + 0.0041554234514795205 * ec + 0.008310846902959041 * eb * eta
                - 0.008310846902959041 * ec * eta + 0.008703312831206973 * l1 * ec2
                - 0.0041554234514795205 * l4 * ec2,
            0.06022799269853725 + 0.02982697398331807 * a_s - 0.02875604015951835 * eb
                - 0.2785060105986231 * chi2 * eb + 0.8355180317958693 * chi3p * eb
                + 0.02875604015951835 * ec - 0.2785060105986231 * chi2 * ec
                + 0.8355180317958693 * chi3p * ec + 0.0575120803190367 * eb * eta
                - 0.0575120803190367 * ec * eta + 0.06648677522367233 * eb * etap
                - 0.06648677522367233 * ec * etap + 0.06962650264965578 * xi1
                + 0.026183660207897242 * a_s * xi1 - 0.033243387611836164 * eb * xi1
                + 0.033243387611836164 * ec * xi1 + 0.06648677522367233 * eb * eta * xi1
                - 0.06648677522367233 * ec * eta * xi1 + 0.06022799269853725 * l1 * ec2
                + 0.06962650264965578 * l1p * ec2 - 0.02875604015951835 * l4 * ec2
                - 0.033243387611836164 * l4p * ec2 + 0.06962650264965578 * l1 * xi1 * ec2
                - 0.033243387611836164 * l4 * xi1 * ec2,
            0.13065762648978307 + 0.017947557772235324 * a_s - 0.06238288520246169 * eb
                - 2.4843077875504385 * chi2 * eb - 2.228048084788985 * chi2p * eb
                + 7.4529233626513145 * chi3p * eb + 3.342072127183477 * chi3pp * eb
                + 0.06238288520246169 * ec - 2.4843077875504385 * chi2 * ec
                - 2.228048084788985 * chi2p * ec + 7.4529233626513145 * chi3p * ec
                + 3.342072127183477 * chi3pp * ec + 0.12476577040492338 * eb * eta
                - 0.12476577040492338 * ec * eta + 0.5930701929996383 * eb * etap
                - 0.5930701929996383 * ec * etap + 0.2659471008946893 * eb * etapp
                - 0.2659471008946893 * ec * etapp + 0.6210769468876096 * xi1
                + 0.29098311228233903 * a_s * xi1 - 0.29653509649981913 * eb * xi1
                - 2.228048084788985 * chi2 * eb * xi1 + 6.684144254366954 * chi3p * eb * xi1
                + 0.29653509649981913 * ec * xi1 - 2.228048084788985 * chi2 * ec * xi1
                + 6.684144254366954 * chi3p * ec * xi1 + 0.5930701929996383 * eb * eta * xi1
                - 0.5930701929996383 * ec * eta * xi1 + 0.5318942017893786 * eb * etap * xi1
                - 0.5318942017893786 * ec * etap * xi1 + 0.2785060105986231 * xi2
                + 0.10473464083158897 * a_s * xi2 - 0.13297355044734466 * eb * xi2
                + 0.13297355044734466 * ec * xi2 + 0.2659471008946893 * eb * eta * xi2
                - 0.2659471008946893 * ec * eta * xi2 + 0.13065762648978307 * l1 * ec2
                + 0.481823941588298 * l1p * ec2 - 0.06238288520246169 * l4 * ec2
                - 0.2300483212761468 * l4p * ec2 + 0.6210769468876096 * l1 * xi1 * ec2
                + 0.5570120211972462 * l1p * xi1 * ec2 - 0.29653509649981913 * l4 * xi1 * ec2
                - 0.2659471008946893 * l4p * xi1 * ec2 + 0.2785060105986231 * l1 * xi2 * ec2
                - 0.13297355044734466 * l4 * xi2 * ec2,
        ],
        BglFormFactor::S1 => [
            0.047334757401521106 + 0.011867083795070281 * a_s + 0.047334757401521106 * l1 * ec2,
            0.284348884202279 + 0.21957539313187335 * a_s - 0.3965605010079518 * eb
                - 1.5147122368486754 * chi2 * eb + 4.544136710546026 * chi3p * eb
                + 0.3965605010079518 * ec - 1.5147122368486754 * chi2 * ec
                + 4.544136710546026 * chi3p * ec + 0.7931210020159036 * eb * eta
                - 0.7931210020159036 * ec * eta + 0.37867805921216885 * xi1
                + 0.09493667036056225 * a_s * xi1 + 0.284348884202279 * l1 * ec2
                + 0.37867805921216885 * l1p * ec2 - 0.3965605010079518 * l4 * ec2
                + 0.37867805921216885 * l1 * xi1 * ec2,
            0.6559703043190042 + 0.3344969447011169 * a_s - 1.5890932982243728 * eb
                - 12.128588768170278 * chi2 * eb - 12.117697894789403 * chi2p * eb
                + 36.38576630451084 * chi3p * eb + 18.176546842184106 * chi3pp * eb
                + 1.5890932982243728 * ec - 12.128588768170278 * chi2 * ec
                - 12.117697894789403 * chi2p * ec + 36.38576630451084 * chi3p * ec
                + 18.176546842184106 * chi3pp * ec + 3.1781865964487457 * eb * eta
                - 3.1781865964487457 * ec * eta + 6.34496801612723 * eb * etap
                - 6.34496801612723 * ec * etap + 3.0321471920425696 * xi1
                + 1.9464764857761112 * a_s * xi1 - 3.172484008063615 * eb * xi1
                - 12.117697894789403 * chi2 * eb * xi1 + 36.35309368436821 * chi3p * eb * xi1
                + 3.172484008063615 * ec * xi1 - 12.117697894789403 * chi2 * ec * xi1
                + 36.35309368436821 * chi3p * ec * xi1 + 6.34496801612723 * eb * eta * xi1
                - 6.34496801612723 * ec * eta * xi1 + 1.5147122368486754 * xi2
                + 0.379746681442249 * a_s * xi2 + 0.6559703043190042 * l1 * ec2
                + 2.2747910736182324 * l1p * ec2 - 1.5890932982243728 * l4 * ec2
                - 3.172484008063615 * l4p * ec2 + 3.0321471920425696 * l1 * xi1 * ec2
                + 3.029424473697351 * l1p * xi1 * ec2 - 3.172484008063615 * l4 * xi1 * ec2
                + 1.5147122368486754 * l1 * xi2 * ec2,
        ],
        BglFormFactor::FT => [
            0.017287377854958173 + 0.02882855797466114 * a_s + 0.017287377854958173 * eb
                + 0.017287377854958173 * ec - 0.03457475570991635 * eb * eta
                - 0.03457475570991635 * ec * eta + 0.017287377854958173 * l1 * ec2
                - 0.017287377854958173 * l4 * ec2,
            0.13580155950042527 + 0.2668270308398708 * a_s + 0.13580155950042527 * eb
                - 0.5531960913586615 * chi2 * eb + 1.6595882740759849 * chi3p * eb
                + 0.13580155950042527 * ec - 0.5531960913586615 * chi2 * ec
                + 1.6595882740759849 * chi3p * ec - 0.27160311900085055 * eb * eta
                - 0.27160311900085055 * ec * eta - 0.2765980456793308 * eb * etap
                - 0.2765980456793308 * ec * etap + 0.1382990228396654 * xi1
                + 0.23062846379728916 * a_s * xi1 + 0.1382990228396654 * eb * xi1
                + 0.1382990228396654 * ec * xi1 - 0.2765980456793308 * eb * eta * xi1
                - 0.2765980456793308 * ec * eta * xi1 + 0.13580155950042527 * l1 * ec2
                + 0.1382990228396654 * l1p * ec2 - 0.13580155950042527 * l4 * ec2
                - 0.1382990228396654 * l4p * ec2 + 0.1382990228396654 * l1 * xi1 * ec2
                - 0.1382990228396654 * l4 * xi1 * ec2,
            0.3875996470087848 + 0.8150376285991504 * a_s + 0.3875996470087848 * eb
                - 5.452042086730931 * chi2 * eb - 4.425568730869292 * chi2p * eb
                + 16.356126260192795 * chi3p * eb + 6.638353096303939 * chi3pp * eb
                + 0.3875996470087848 * ec - 5.452042086730931 * chi2 * ec
                - 4.425568730869292 * chi2p * ec + 16.356126260192795 * chi3p * ec
                + 6.638353096303939 * chi3pp * ec - 0.7751992940175696 * eb * eta
                - 0.7751992940175696 * ec * eta - 2.7260210433654657 * eb * etap
                - 2.7260210433654657 * ec * etap - 1.106392182717323 * eb * etapp
                - 1.106392182717323 * ec * etapp + 1.3630105216827328 * xi1
                + 2.595873174313545 * a_s * xi1 + 1.3630105216827328 * eb * xi1
                - 4.425568730869292 * chi2 * eb * xi1 + 13.276706192607879 * chi3p * eb * xi1
                + 1.3630105216827328 * ec * xi1 - 4.425568730869292 * chi2 * ec * xi1
                + 13.276706192607879 * chi3p * ec * xi1 - 2.7260210433654657 * eb * eta * xi1
                - 2.7260210433654657 * ec * eta * xi1 - 2.212784365434646 * eb * etap * xi1
                - 2.212784365434646 * ec * etap * xi1 + 0.5531960913586615 * xi2
                + 0.9225138551891566 * a_s * xi2 + 0.5531960913586615 * eb * xi2
                + 0.5531960913586615 * ec * xi2 - 1.106392182717323 * eb * eta * xi2
                - 1.106392182717323 * ec * eta * xi2 + 0.3875996470087848 * l1 * ec2
                + 1.0864124760034022 * l1p * ec2 - 0.3875996470087848 * l4 * ec2
                - 1.0864124760034022 * l4p * ec2 + 1.3630105216827328 * l1 * xi1 * ec2
                + 1.106392182717323 * l1p * xi1 * ec2 - 1.3630105216827328 * l4 * xi1 * ec2
                - 1.106392182717323 * l4p * xi1 * ec2 + 0.5531960913586615 * l1 * xi2 * ec2
                - 0.5531960913586615 * l4 * xi2 * ec2,
        ],
        BglFormFactor::A1 => [
            0.008363045281441904 - 0.003478702112200171 * a_s + 0.008363045281441904 * l2 * ec2,
            0.0812300174749896 + 0.009087844216195124 * a_s + 0.033452181125767616 * eb
                - 0.26761744900614093 * chi2 * eb + 0.8028523470184228 * chi3p * eb
                + 0.033452181125767616 * ec - 0.26761744900614093 * chi3p * ec
                - 0.06690436225153523 * eb * eta + 0.06690436225153523 * xi1
                - 0.02782961689760137 * a_s * xi1 + 0.0812300174749896 * l2 * ec2
                + 0.06690436225153523 * l2p * ec2 - 0.033452181125767616 * l5 * ec2
                + 0.06690436225153523 * l2 * xi1 * ec2,
            0.31721556277653973 + 0.1738424167676217 * a_s + 0.25801570764842313 * eb
                - 3.134595457211949 * chi2 * eb - 2.1409395920491274 * chi2p * eb
                + 9.403786371635848 * chi3p * eb + 3.211409388073691 * chi3pp * eb
                + 0.25801570764842313 * ec - 3.134595457211949 * chi3p * ec
                - 1.0704697960245637 * chi3pp * ec - 0.5160314152968463 * eb * eta
                - 0.5352348980122819 * eb * etap + 0.7836488643029873 * xi1
                + 0.017043519934358188 * a_s * xi1 + 0.26761744900614093 * eb * xi1
                - 2.1409395920491274 * chi2 * eb * xi1 + 6.422818776147382 * chi3p * eb * xi1
                + 0.26761744900614093 * ec * xi1 - 2.1409395920491274 * chi3p * ec * xi1
                - 0.5352348980122819 * eb * eta * xi1 + 0.26761744900614093 * xi2
                - 0.11131846759040548 * a_s * xi2 + 0.31721556277653973 * l2 * ec2
                + 0.6498401397999168 * l2p * ec2 - 0.25801570764842313 * l5 * ec2
                - 0.26761744900614093 * l5p * ec2 + 0.7836488643029873 * l2 * xi1 * ec2
                + 0.5352348980122819 * l2p * xi1 * ec2 - 0.26761744900614093 * l5 * xi1 * ec2
                + 0.26761744900614093 * l2 * xi2 * ec2,
        ],
        BglFormFactor::A5 => [
            0.00560220278709002 - 0.0023302988340466895 * a_s + 0.00560220278709002 * l2 * ec2,
            0.04352386562353383 + 0.013706788896745767 * a_s - 0.049962145016877284 * eb
                - 0.17927048918688063 * chi2 * eb + 0.5378114675606419 * chi3p * eb
                + 0.04996214501687728 * ec + 0.17927048918688063 * chi2 * ec
                - 0.17927048918688063 * chi3p * ec + 0.09992429003375457 * eb * eta
                + 0.09992429003375457 * ec * eta + 0.04481762229672016 * xi1
                - 0.01864239067237352 * a_s * xi1 + 0.04352386562353383 * l2 * ec2
                + 0.04481762229672016 * l2p * ec2 + 0.04481762229672016 * l3 * ec2
                + 0.049962145016877284 * l5 * ec2 - 0.09992429003375457 * l6 * ec2
                + 0.04481762229672016 * l2 * xi1 * ec2,
            0.1173127381910642 + 0.1179664643240928 * a_s - 0.2882347553669587 * eb
                - 1.7513046783268438 * chi2 * eb - 1.434163913495045 * chi2p * eb
                + 5.253914034980532 * chi3p * eb + 2.1512458702425676 * chi3pp * eb
                + 0.2882347553669586 * ec + 1.7513046783268438 * chi2 * ec
                + 1.434163913495045 * chi2p * ec - 1.7513046783268438 * chi3p * ec
                - 0.7170819567475225 * chi3pp * ec + 0.5764695107339174 * eb * eta
                + 0.5764695107339174 * ec * eta + 0.7993943202700365 * eb * etap
                + 0.7993943202700365 * ec * etap + 0.43782616958171094 * xi1
                + 0.07236952982921908 * a_s * xi1 - 0.39969716013501827 * eb * xi1
                - 1.434163913495045 * chi2 * eb * xi1 + 4.302491740485135 * chi3p * eb * xi1
                + 0.3996971601350182 * ec * xi1 + 1.434163913495045 * chi2 * ec * xi1
                - 1.434163913495045 * chi3p * ec * xi1 + 0.7993943202700365 * eb * eta * xi1
                + 0.7993943202700365 * ec * eta * xi1 + 0.17927048918688063 * xi2
                - 0.07456956268949408 * a_s * xi2 + 0.1173127381910642 * l2 * ec2
                + 0.34819092498827064 * l2p * ec2 + 0.43782616958171094 * l3 * ec2
                + 0.35854097837376125 * l3p * ec2 + 0.2882347553669587 * l5 * ec2
                + 0.39969716013501827 * l5p * ec2 - 0.9761666708689356 * l6 * ec2
                - 0.7993943202700365 * l6p * ec2 + 0.43782616958171094 * l2 * xi1 * ec2
                + 0.35854097837376125 * l2p * xi1 * ec2 + 0.35854097837376125 * l3 * xi1 * ec2
                + 0.39969716013501827 * l5 * xi1 * ec2 - 0.7993943202700365 * l6 * xi1 * ec2
                + 0.17927048918688063 * l2 * xi2 * ec2,
        ],
        BglFormFactor::V4 => [
            0.0075025867890451845 + 0.006882664262345855 * a_s + 0.0075025867890451845 * eb
                + 0.0075025867890451845 * ec - 0.015005173578090369 * eb * eta
                + 0.0075025867890451845 * l2 * ec2 - 0.0075025867890451845 * l5 * ec2,
            0.05963010511442657 + 0.06649203938674278 * a_s + 0.05963010511442657 * eb
                - 0.2400827772494459 * chi2 * eb + 0.7202483317483377 * chi3p * eb
                + 0.05963010511442657 * ec - 0.2400827772494459 * chi3p * ec
                - 0.11926021022885314 * eb * eta - 0.12004138862472295 * eb * etap
                + 0.060020694312361476 * xi1 + 0.055061314098766835 * a_s * xi1
                + 0.060020694312361476 * eb * xi1 + 0.060020694312361476 * ec * xi1
                - 0.12004138862472295 * eb * eta * xi1 + 0.05963010511442657 * l2 * ec2
                + 0.060020694312361476 * l2p * ec2 - 0.05963010511442657 * l5 * ec2
                - 0.060020694312361476 * l5p * ec2 + 0.060020694312361476 * l2 * xi1 * ec2
                - 0.060020694312361476 * l5 * xi1 * ec2,
            0.1543810939148951 + 0.1680554401420258 * a_s + 0.1543810939148951 * eb
                - 2.388328918160542 * chi2 * eb - 1.9206622179955672 * chi2p * eb
                + 7.164986754481626 * chi3p * eb + 2.8809933269933508 * chi3pp * eb
                + 0.1543810939148951 * ec - 2.388328918160542 * chi3p * ec
                - 0.9603311089977836 * chi3pp * ec - 0.3087621878297902 * eb * eta
                - 1.194164459080271 * eb * etap - 0.4801655544988918 * eb * etapp
                + 0.5970822295401355 * xi1 + 0.642058943291476 * a_s * xi1
                + 0.5970822295401355 * eb * xi1 - 1.9206622179955672 * chi2 * eb * xi1
                + 5.7619866539867015 * chi3p * eb * xi1 + 0.5970822295401355 * ec * xi1
                - 1.9206622179955672 * chi3p * ec * xi1 - 1.194164459080271 * eb * eta * xi1
                - 0.9603311089977836 * eb * etap * xi1 + 0.2400827772494459 * xi2
                + 0.22024525639506734 * a_s * xi2 + 0.2400827772494459 * eb * xi2
                + 0.2400827772494459 * ec * xi2 - 0.4801655544988918 * eb * eta * xi2
                + 0.1543810939148951 * l2 * ec2 + 0.47704084091541255 * l2p * ec2
                - 0.1543810939148951 * l5 * ec2 - 0.47704084091541255 * l5p * ec2
                + 0.5970822295401355 * l2 * xi1 * ec2 + 0.4801655544988918 * l2p * xi1 * ec2
                - 0.5970822295401355 * l5 * xi1 * ec2 - 0.4801655544988918 * l5p * xi1 * ec2
                + 0.2400827772494459 * l2 * xi2 * ec2 - 0.2400827772494459 * l5 * xi2 * ec2,
        ],
        BglFormFactor::P1 => [
            0.03148856751270908 - 0.001974121999243681 * a_s - 0.014123119863775352 * eb
                + 0.014123119863775352 * ec + 0.028246239727550703 * eb * eta
                + 0.028246239727550703 * ec * eta + 0.03148856751270908 * l2 * ec2
                + 0.014123119863775352 * l5 * ec2 - 0.028246239727550703 * l6 * ec2,
            0.26142777033909836 - 0.04273192938942658 * a_s - 0.11725448401958662 * eb
                - 1.0076341604066907 * chi2 * eb + 3.022902481220072 * chi3p * eb
                + 0.11725448401958662 * ec + 1.0076341604066907 * chi2 * ec
                - 1.0076341604066907 * chi3p * ec + 0.23450896803917323 * eb * eta
                + 0.23450896803917323 * ec * eta + 0.22596991782040562 * eb * etap
                + 0.22596991782040562 * ec * etap + 0.2519085401016727 * xi1
                - 0.015792975993949448 * a_s * xi1 - 0.11298495891020281 * eb * xi1
                + 0.11298495891020281 * ec * xi1 + 0.22596991782040562 * eb * eta * xi1
                + 0.22596991782040562 * ec * eta * xi1 + 0.26142777033909836 * l2 * ec2
                + 0.2519085401016727 * l2p * ec2 + 0.2519085401016727 * l3 * ec2
                + 0.11725448401958662 * l5 * ec2 + 0.11298495891020281 * l5p * ec2
                - 0.34749392694937603 * l6 * ec2 - 0.22596991782040562 * l6p * ec2
                + 0.2519085401016727 * l2 * xi1 * ec2 + 0.11298495891020281 * l5 * xi1 * ec2
                - 0.22596991782040562 * l6 * xi1 * ec2,
            0.7662176967652987 - 0.5869911628437433 * a_s - 0.3436607387361962 * eb
                - 10.380956971664528 * chi2 * eb - 8.061073283253524 * chi2p * eb
                + 31.142870914993587 * chi3p * eb + 12.091609924880288 * chi3pp * eb
                + 0.3436607387361962 * ec + 10.38095697166453 * chi2 * ec
                + 8.061073283253524 * chi2p * ec - 10.380956971664528 * chi3p * ec
                - 4.030536641626762 * chi3pp * ec + 0.6873214774723924 * eb * eta
                + 0.6873214774723924 * ec * eta + 2.328011579954197 * eb * etap
                + 2.328011579954197 * ec * etap + 0.9038796712816225 * eb * etapp
                + 0.9038796712816225 * ec * etapp + 2.595239242916132 * xi1
                - 0.3734413871033115 * a_s * xi1 - 1.1640057899770986 * eb * xi1
                - 8.061073283253524 * chi2 * eb * xi1 + 24.183219849760576 * chi3p * eb * xi1
                + 1.1640057899770986 * ec * xi1 + 8.061073283253524 * chi2 * ec * xi1
                - 8.061073283253524 * chi3p * ec * xi1 + 2.328011579954197 * eb * eta * xi1
                + 2.328011579954197 * ec * eta * xi1 + 1.807759342563245 * eb * etap * xi1
                + 1.807759342563245 * ec * etap * xi1 + 1.0076341604066905 * xi2
                - 0.06317190397579778 * a_s * xi2 - 0.45193983564081125 * eb * xi2
                + 0.45193983564081125 * ec * xi2 + 0.9038796712816225 * eb * eta * xi2
                + 0.9038796712816225 * ec * eta * xi2 + 0.7662176967652987 * l2 * ec2
                + 2.091422162712787 * l2p * ec2 + 2.5952392429161324 * l3 * ec2
                + 2.015268320813381 * l3p * ec2 + 0.3436607387361962 * l5 * ec2
                + 0.9380358721566929 * l5p * ec2 - 1.851327267449491 * l6 * ec2
                - 2.7799514155950082 * l6p * ec2 + 2.595239242916132 * l2 * xi1 * ec2
                + 2.015268320813381 * l2p * xi1 * ec2 + 2.015268320813381 * l3 * xi1 * ec2
                + 1.1640057899770986 * l5 * xi1 * ec2 + 0.9038796712816225 * l5p * xi1 * ec2
                - 3.23189125123582 * l6 * xi1 * ec2 - 1.807759342563245 * l6p * xi1 * ec2
                + 1.0076341604066905 * l2 * xi2 * ec2 + 0.45193983564081125 * l5 * xi2 * ec2
                - 0.9038796712816225 * l6 * xi2 * ec2,
        ],
        BglFormFactor::T1 => [
            0.008554226159037559 + 0.00487407755667564 * a_s - 0.003836705538833072 * eb
                + 0.003836705538833072 * ec + 0.007673411077666144 * eb * eta
                + 0.008554226159037559 * l2 * ec2 - 0.003836705538833072 * l5 * ec2,
            0.06798847109383505 + 0.04524757898962031 * a_s - 0.03049390310389663 * eb
                - 0.2737352370892019 * chi2 * eb + 0.8212057112676057 * chi3p * eb
                + 0.03049390310389663 * ec - 0.2737352370892019 * chi3p * ec
                + 0.06098780620779326 * eb * eta + 0.06138728862132917 * eb * etap
                + 0.06843380927230047 * xi1 + 0.03899262045340512 * a_s * xi1
                - 0.030693644310664583 * eb * xi1 + 0.030693644310664583 * ec * xi1
                + 0.06138728862132917 * eb * eta * xi1 + 0.06798847109383505 * l2 * ec2
                + 0.06843380927230047 * l2p * ec2 - 0.03049390310389663 * l5 * ec2
                - 0.030693644310664583 * l5p * ec2 + 0.06843380927230047 * l2 * xi1 * ec2
                - 0.030693644310664583 * l5 * xi1 * ec2,
            0.17602072847139927 + 0.07214718628475085 * a_s - 0.0789480768125533 * eb
                - 2.7231015491811252 * chi2 * eb - 2.189881896713615 * chi2p * eb
                + 8.169304647543376 * chi3p * eb + 3.2848228450704227 * chi3pp * eb
                + 0.0789480768125533 * ec - 2.7231015491811252 * chi3p * ec
                - 1.0949409483568076 * chi3pp * ec + 0.1578961536251066 * eb * eta
                + 0.6106770269050045 * eb * etap + 0.24554915448531667 * eb * etapp
                + 0.6807753872952813 * xi1 + 0.4399658728237728 * a_s * xi1
                - 0.30533851345250224 * eb * xi1 - 2.189881896713615 * chi2 * eb * xi1
                + 6.569645690140845 * chi3p * eb * xi1 + 0.30533851345250224 * ec * xi1
                - 2.189881896713615 * chi3p * ec * xi1 + 0.6106770269050045 * eb * eta * xi1
                + 0.49109830897063333 * eb * etap * xi1 + 0.2737352370892019 * xi2
                + 0.15597048181362047 * a_s * xi2 - 0.12277457724265833 * eb * xi2
                + 0.12277457724265833 * ec * xi2 + 0.24554915448531667 * eb * eta * xi2
                + 0.17602072847139927 * l2 * ec2 + 0.5439077687506804 * l2p * ec2
                - 0.0789480768125533 * l5 * ec2 - 0.24395122483117307 * l5p * ec2
                + 0.6807753872952813 * l2 * xi1 * ec2 + 0.5474704741784038 * l2p * xi1 * ec2
                - 0.30533851345250224 * l5 * xi1 * ec2 - 0.24554915448531667 * l5p * xi1 * ec2
                + 0.2737352370892019 * l2 * xi2 * ec2 - 0.12277457724265833 * l5 * xi2 * ec2,
        ],
        BglFormFactor::T2 => [
            0.0023576176034998757 + 0.0007880902517400929 * a_s + 0.0023576176034998757 * l2 * ec2,
            0.020674096971735504 + 0.01926471690926969 * a_s - 0.021025949448286316 * eb
                - 0.07544376331199602 * chi2 * eb + 0.22633128993598814 * chi3p * eb
                + 0.021025949448286316 * ec - 0.07544376331199602 * chi3p * ec
                + 0.04205189889657263 * eb * eta + 0.018860940827999006 * xi1
                + 0.006304722013920744 * a_s * xi1 + 0.020674096971735504 * l2 * ec2
                + 0.018860940827999006 * l2p * ec2 - 0.021025949448286316 * l5 * ec2
                + 0.018860940827999006 * l2 * xi1 * ec2,
            0.06768609114155201 + 0.09651578481435866 * a_s - 0.14232597356729948 * eb
                - 0.8124586297195282 * chi2 * eb - 0.6035501064959682 * chi2p * eb
                + 2.437375889158585 * chi3p * eb + 0.9053251597439524 * chi3pp * eb
                + 0.14232597356729948 * ec - 0.8124586297195282 * chi3p * ec
                - 0.3017750532479841 * chi3pp * ec + 0.28465194713459896 * eb * eta
                + 0.33641519117258106 * eb * etap + 0.20311465742988205 * xi1
                + 0.16672717930199904 * a_s * xi1 - 0.16820759558629053 * eb * xi1
                - 0.6035501064959682 * chi2 * eb * xi1 + 1.810650319487905 * chi3p * eb * xi1
                + 0.16820759558629053 * ec * xi1 - 0.6035501064959682 * chi3p * ec * xi1
                + 0.33641519117258106 * eb * eta * xi1 + 0.07544376331199602 * xi2
                + 0.025218888055682977 * a_s * xi2 + 0.06768609114155201 * l2 * ec2
                + 0.16539277577388406 * l2p * ec2 - 0.14232597356729948 * l5 * ec2
                - 0.16820759558629053 * l5p * ec2 + 0.20311465742988205 * l2 * xi1 * ec2
                + 0.15088752662399205 * l2p * xi1 * ec2 - 0.16820759558629053 * l5 * xi1 * ec2
                + 0.07544376331199602 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T23 => [
            0.007038967893068947 + 0.002352943908547394 * a_s + 0.007038967893068947 * l2 * ec2,
            0.06836929201240667 + 0.06431641970627533 * a_s + 0.028155871572275844 * eb
                - 0.2252469725782063 * chi2 * eb + 0.6757409177346189 * chi3p * eb
                + 0.02815587157227576 * ec + 0.22524697257820642 * chi2 * ec
                - 0.2252469725782063 * chi3p * ec - 0.05631174314455169 * eb * eta
                + 0.0563117431445516 * ec * eta + 0.056311743144551576 * xi1
                + 0.018823551268379153 * a_s * xi1 + 0.06836929201240667 * l2 * ec2
                + 0.056311743144551576 * l2p * ec2 + 0.056311743144551604 * l3 * ec2
                + 0.028155871572275844 * l5 * ec2 - 0.056311743144551604 * l6 * ec2
                + 0.056311743144551576 * l2 * xi1 * ec2,
            0.2669924753989712 + 0.40151283179319763 * a_s + 0.21716542490507532 * eb
                - 2.638311289553426 * chi2 * eb - 1.8019757806256507 * chi2p * eb
                + 7.914933868660278 * chi3p * eb + 2.7029636709384763 * chi3pp * eb
                + 0.21716542490507487 * ec + 2.6383112895534264 * chi2 * ec
                + 1.8019757806256507 * chi2p * ec - 2.638311289553426 * chi3p * ec
                - 0.9009878903128253 * chi3pp * ec - 0.43433084981015063 * eb * eta
                + 0.4343308498101503 * ec * eta - 0.4504939451564132 * eb * etap
                + 0.45049394515641267 * ec * etap + 0.6595778223883565 * xi1
                + 0.552178460186961 * a_s * xi1 + 0.2252469725782066 * eb * xi1
                - 1.8019757806256507 * chi2 * eb * xi1 + 5.405927341876953 * chi3p * eb * xi1
                + 0.22524697257820614 * ec * xi1 + 1.8019757806256507 * chi2 * ec * xi1
                - 1.8019757806256507 * chi3p * ec * xi1 - 0.4504939451564132 * eb * eta * xi1
                + 0.45049394515641267 * ec * eta * xi1 + 0.22524697257820633 * xi2
                + 0.07529420507351661 * a_s * xi2 + 0.2669924753989712 * l2 * ec2
                + 0.5469543360992533 * l2p * ec2 + 0.6595778223883566 * l3 * ec2
                + 0.45049394515641267 * l3p * ec2 + 0.21716542490507532 * l5 * ec2
                + 0.2252469725782066 * l5p * ec2 - 0.6595778223883566 * l6 * ec2
                - 0.45049394515641267 * l6p * ec2 + 0.6595778223883565 * l2 * xi1 * ec2
                + 0.45049394515641267 * l2p * xi1 * ec2 + 0.45049394515641267 * l3 * xi1 * ec2
                + 0.2252469725782066 * l5 * xi1 * ec2 - 0.45049394515641267 * l6 * xi1 * ec2
                + 0.22524697257820633 * l2 * xi2 * ec2,
        ],
        BglFormFactor::P2 => [
            0.043848623052024895 - 0.001635241305684815 * a_s - 0.02108086828850025 * eb
                + 0.02108086828850025 * ec - 0.0421617365770005 * eb * eta
                - 0.0421617365770005 * ec * eta + 0.043848623052024895 * l1 * ec2
                - 0.02108086828850025 * l4 * ec2,
            0.32960013132293325 - 0.04736745631879559 * a_s - 0.1584600945860323 * eb
                + 1.4031559376647966 * chi2 * eb - 1.4031559376647966 * chi3p * eb
                + 0.1584600945860323 * ec - 1.4031559376647966 * chi2 * ec
                + 4.209467812994389 * chi3p * ec - 0.3169201891720646 * eb * eta
                - 0.3169201891720646 * ec * eta - 0.337293892616004 * eb * etap
                - 0.337293892616004 * ec * etap + 0.35078898441619916 * xi1
                - 0.01308193044547852 * a_s * xi1 - 0.168646946308002 * eb * xi1
                + 0.168646946308002 * ec * xi1 - 0.337293892616004 * eb * eta * xi1
                - 0.337293892616004 * ec * eta * xi1 + 0.32960013132293325 * l1 * ec2
                + 0.35078898441619916 * l1p * ec2 - 0.1584600945860323 * l4 * ec2
                - 0.168646946308002 * l4p * ec2 + 0.35078898441619916 * l1 * xi1 * ec2
                - 0.168646946308002 * l4 * xi1 * ec2,
            0.8529477601473066 - 0.7406079320469009 * a_s - 0.4100671386488687 * eb
                + 13.353516077663457 * chi2 * eb + 11.225247501318373 * chi2p * eb
                - 13.353516077663457 * chi3p * eb - 5.6126237506591865 * chi3pp * eb
                + 0.4100671386488687 * ec - 13.353516077663457 * chi2 * ec
                - 11.225247501318373 * chi2p * ec + 40.06054823299037 * chi3p * ec
                + 16.837871251977557 * chi3pp * ec - 0.8201342772977374 * eb * eta
                - 0.8201342772977374 * ec * eta - 3.2099492986085245 * eb * etap
                - 3.2099492986085245 * ec * etap - 1.3491755704640158 * eb * etapp
                - 1.3491755704640158 * ec * etapp + 3.3383790194158642 * xi1
                - 0.4051035114413218 * a_s * xi1 - 1.6049746493042623 * eb * xi1
                + 11.225247501318373 * chi2 * eb * xi1 - 11.225247501318373 * chi3p * eb * xi1
                + 1.6049746493042623 * ec * xi1 - 11.225247501318373 * chi2 * ec * xi1
                + 33.675742503955114 * chi3p * ec * xi1 - 3.2099492986085245 * eb * eta * xi1
                - 3.2099492986085245 * ec * eta * xi1 - 2.6983511409280316 * eb * etap * xi1
                - 2.6983511409280316 * ec * etap * xi1 + 1.4031559376647966 * xi2
                - 0.05232772178191408 * a_s * xi2 - 0.6745877852320079 * eb * xi2
                + 0.6745877852320079 * ec * xi2 - 1.3491755704640158 * eb * eta * xi2
                - 1.3491755704640158 * ec * eta * xi2 + 0.8529477601473066 * l1 * ec2
                + 2.636801050583466 * l1p * ec2 - 0.4100671386488687 * l4 * ec2
                - 1.2676807566882584 * l4p * ec2 + 3.3383790194158642 * l1 * xi1 * ec2
                + 2.8063118753295933 * l1p * xi1 * ec2 - 1.6049746493042623 * l4 * xi1 * ec2
                - 1.3491755704640158 * l4p * xi1 * ec2 + 1.4031559376647966 * l1 * xi2 * ec2
                - 0.6745877852320079 * l4 * xi2 * ec2,
        ],
        BglFormFactor::V5 => [
            0.009099008915484865 + 0.008347177479748157 * a_s + 0.009099008915484865 * eb
                + 0.009099008915484865 * ec - 0.01819801783096973 * ec * eta
                + 0.009099008915484865 * l1 * ec2 - 0.009099008915484865 * l4 * ec2,
            0.0669555721837609 + 0.07572072519390013 * a_s + 0.0669555721837609 * eb
                - 0.2911682852955157 * chi3p * eb + 0.0669555721837609 * ec
                - 0.2911682852955157 * chi2 * ec + 0.8735048558865469 * chi3p * ec
                - 0.1339111443675218 * ec * eta - 0.14558414264775785 * ec * etap
                + 0.07279207132387892 * xi1 + 0.06677741983798526 * a_s * xi1
                + 0.07279207132387892 * eb * xi1 + 0.07279207132387892 * ec * xi1
                - 0.14558414264775785 * ec * eta * xi1 + 0.0669555721837609 * l1 * ec2
                + 0.07279207132387892 * l1p * ec2 - 0.0669555721837609 * l4 * ec2
                - 0.07279207132387892 * l4p * ec2 + 0.07279207132387892 * l1 * xi1 * ec2
                - 0.07279207132387892 * l4 * xi1 * ec2,
            0.15746000636048543 + 0.16807718349112652 * a_s + 0.15746000636048543 * eb
                - 2.7249148804713803 * chi3p * eb - 1.1646731411820628 * chi3pp * eb
                + 0.15746000636048543 * ec - 2.7249148804713803 * chi2 * ec
                - 2.3293462823641256 * chi2p * ec + 8.17474464141414 * chi3p * ec
                + 3.4940194235461877 * chi3pp * ec - 0.31492001272097087 * ec * eta
                - 1.3624574402356902 * ec * etap - 0.5823365705910314 * ec * etapp
                + 0.6812287201178451 * xi1 + 0.7393206412271716 * a_s * xi1
                + 0.6812287201178451 * eb * xi1 - 2.3293462823641256 * chi3p * eb * xi1
                + 0.6812287201178451 * ec * xi1 - 2.3293462823641256 * chi2 * ec * xi1
                + 6.988038847092375 * chi3p * ec * xi1 - 1.3624574402356902 * ec * eta * xi1
                - 1.1646731411820628 * ec * etap * xi1 + 0.2911682852955157 * xi2
                + 0.267109679351941 * a_s * xi2 + 0.2911682852955157 * eb * xi2
                + 0.2911682852955157 * ec * xi2 - 0.5823365705910314 * ec * eta * xi2
                + 0.15746000636048543 * l1 * ec2 + 0.5356445774700872 * l1p * ec2
                - 0.15746000636048543 * l4 * ec2 - 0.5356445774700872 * l4p * ec2
                + 0.6812287201178451 * l1 * xi1 * ec2 + 0.5823365705910314 * l1p * xi1 * ec2
                - 0.6812287201178451 * l4 * xi1 * ec2 - 0.5823365705910314 * l4p * xi1 * ec2
                + 0.2911682852955157 * l1 * xi2 * ec2 - 0.2911682852955157 * l4 * xi2 * ec2,
        ],
        BglFormFactor::A2 => [
            0.013497592386244964 - 0.005614474340805168 * a_s + 0.013497592386244964 * l1 * ec2,
            0.11544627665098015 + 0.021179445204968634 * a_s + 0.053990369544979856 * eb
                - 0.43192295635983885 * chi3p * eb + 0.053990369544979856 * ec
                - 0.43192295635983885 * chi2 * ec + 1.2957688690795166 * chi3p * ec
                - 0.10798073908995971 * ec * eta + 0.10798073908995971 * xi1
                - 0.044915794726441347 * a_s * xi1 + 0.11544627665098015 * l1 * ec2
                + 0.10798073908995971 * l1p * ec2 - 0.053990369544979856 * l4 * ec2
                + 0.10798073908995971 * l1 * xi1 * ec2,
            0.39295357265360764 + 0.24981753639014034 * a_s + 0.3538043675139609 * eb
                - 4.558126765551042 * chi3p * eb - 1.7276918254393554 * chi3pp * eb
                + 0.3538043675139609 * ec - 4.558126765551042 * chi2 * ec
                - 3.455383650878711 * chi2p * ec + 13.674380296653126 * chi3p * ec
                + 5.183075476318066 * chi3pp * ec - 0.7076087350279218 * ec * eta
                - 0.8638459127196777 * ec * etap + 1.1395316913877604 * xi1
                + 0.07960397218686636 * a_s * xi1 + 0.43192295635983885 * eb * xi1
                - 3.455383650878711 * chi3p * eb * xi1 + 0.43192295635983885 * ec * xi1
                - 3.455383650878711 * chi2 * ec * xi1 + 10.366150952636133 * chi3p * ec * xi1
                - 0.8638459127196777 * ec * eta * xi1 + 0.43192295635983885 * xi2
                - 0.17966317890576539 * a_s * xi2 + 0.39295357265360764 * l1 * ec2
                + 0.9235702132078412 * l1p * ec2 - 0.3538043675139609 * l4 * ec2
                - 0.43192295635983885 * l4p * ec2 + 1.1395316913877604 * l1 * xi1 * ec2
                + 0.8638459127196777 * l1p * xi1 * ec2 - 0.43192295635983885 * l4 * xi1 * ec2
                + 0.43192295635983885 * l1 * xi2 * ec2,
        ],
        BglFormFactor::A6 => [
            0.009779222979820786 - 0.004067777046606362 * a_s + 0.009779222979820786 * l1 * ec2,
            0.06472590811759735 + 0.023998151689830795 * a_s - 0.081363908984295 * eb
                + 0.3129351353542651 * chi2 * eb - 0.31293513535426515 * chi3p * eb
                + 0.08136390898429502 * ec - 0.31293513535426515 * chi2 * ec
                + 0.9388054060627955 * chi3p * ec - 0.16272781796859004 * eb * eta
                - 0.16272781796859004 * ec * eta + 0.07823378383856629 * xi1
                - 0.032542216372850895 * a_s * xi1 + 0.06472590811759735 * l1 * ec2
                + 0.07823378383856629 * l1p * ec2 - 0.08136390898429502 * l4 * ec2
                + 0.07823378383856629 * l1 * xi1 * ec2,
            0.14122128288513733 + 0.14055508337852513 * a_s - 0.37579685908121613 * eb
                + 2.6970993304716457 * chi2 * eb + 2.5034810828341207 * chi2p * eb
                - 2.6970993304716457 * chi3p * eb - 1.2517405414170606 * chi3pp * eb
                + 0.3757968590812163 * ec - 2.6970993304716457 * chi2 * ec
                - 2.503481082834121 * chi2p * ec + 8.091297991414939 * chi3p * ec
                + 3.755221624251182 * chi3pp * ec - 0.7515937181624326 * eb * eta
                - 0.7515937181624326 * ec * eta - 1.3018225437487203 * eb * etap
                - 1.3018225437487203 * ec * etap + 0.6742748326179115 * xi1
                + 0.1269007807729445 * a_s * xi1 - 0.65091127187436 * eb * xi1
                + 2.5034810828341207 * chi2 * eb * xi1 - 2.503481082834121 * chi3p * eb * xi1
                + 0.6509112718743602 * ec * xi1 - 2.503481082834121 * chi2 * ec * xi1
                + 7.510443248502364 * chi3p * ec * xi1 - 1.3018225437487203 * eb * eta * xi1
                - 1.3018225437487203 * ec * eta * xi1 + 0.31293513535426515 * xi2
                - 0.13016886549140358 * a_s * xi2 + 0.14122128288513733 * l1 * ec2
                + 0.5178072649407789 * l1p * ec2 - 0.3757968590812163 * l4 * ec2
                - 0.6509112718743602 * l4p * ec2 + 0.6742748326179115 * l1 * xi1 * ec2
                + 0.6258702707085303 * l1p * xi1 * ec2 - 0.6509112718743602 * l4 * xi1 * ec2
                + 0.31293513535426515 * l1 * xi2 * ec2,
        ],
        BglFormFactor::T1Bar => [
            0.010924441065250886 + 0.006409582853669373 * a_s - 0.005252085178337256 * eb
                + 0.005252085178337256 * ec - 0.010504170356674511 * ec * eta
                + 0.010924441065250886 * l1 * ec2 - 0.005252085178337256 * l4 * ec2,
            0.08038811799237258 + 0.05563751173661732 * a_s - 0.038647766096257516 * eb
                - 0.34958211408802836 * chi3p * eb + 0.038647766096257516 * ec
                - 0.34958211408802836 * chi2 * ec + 1.048746342264085 * chi3p * ec
                - 0.07729553219251503 * ec * eta - 0.08403336285339609 * ec * etap
                + 0.08739552852200709 * xi1 + 0.05127666282935498 * a_s * xi1
                - 0.042016681426698045 * eb * xi1 + 0.042016681426698045 * ec * xi1
                - 0.08403336285339609 * ec * eta * xi1 + 0.08038811799237258 * l1 * ec2
                + 0.08739552852200709 * l1p * ec2 - 0.038647766096257516 * l4 * ec2
                - 0.042016681426698045 * l4p * ec2 + 0.08739552852200709 * l1 * xi1 * ec2
                - 0.042016681426698045 * l4 * xi1 * ec2,
            0.18904944215317204 + 0.071218830706747 * a_s - 0.09088829050155152 * eb
                - 3.27158400393198 * chi3p * eb - 1.3983284563521134 * chi3pp * eb
                + 0.09088829050155152 * ec - 3.27158400393198 * chi2 * ec
                - 2.796656912704227 * chi2p * ec + 9.814752011795939 * chi3p * ec
                + 4.19498536905634 * chi3pp * ec - 0.18177658100310304 * ec * eta
                - 0.7864309832469124 * ec * etap - 0.3361334514135844 * ec * etapp
                + 0.817896000982995 * xi1 + 0.5476534195516486 * a_s * xi1
                - 0.3932154916234562 * eb * xi1 - 2.796656912704227 * chi3p * eb * xi1
                + 0.3932154916234562 * ec * xi1 - 2.796656912704227 * chi2 * ec * xi1
                + 8.38997073811268 * chi3p * ec * xi1 - 0.7864309832469124 * ec * eta * xi1
                - 0.6722669028271688 * ec * etap * xi1 + 0.34958211408802836 * xi2
                + 0.20510665131741992 * a_s * xi2 - 0.1680667257067922 * eb * xi2
                + 0.1680667257067922 * ec * xi2 - 0.3361334514135844 * ec * eta * xi2
                + 0.18904944215317204 * l1 * ec2 + 0.6431049439389808 * l1p * ec2
                - 0.09088829050155152 * l4 * ec2 - 0.3091821287700601 * l4p * ec2
                + 0.817896000982995 * l1 * xi1 * ec2 + 0.6991642281760567 * l1p * xi1 * ec2
                - 0.3932154916234562 * l4 * xi1 * ec2 - 0.3361334514135844 * l4p * xi1 * ec2
                + 0.34958211408802836 * l1 * xi2 * ec2 - 0.1680667257067922 * l4 * xi2 * ec2,
        ],
        BglFormFactor::T2Bar => [
            -0.004251589347148997 - 0.0014211957502845848 * a_s - 0.004251589347148997 * l1 * ec2,
            -0.03239165548585615 - 0.03177047341885325 * a_s + 0.03537355978014203 * eb
                + 0.13605085910876794 * chi3p * eb - 0.03537355978014203 * ec
                + 0.13605085910876794 * chi2 * ec - 0.4081525773263038 * chi3p * ec
                + 0.07074711956028407 * ec * eta - 0.034012714777191984 * xi1
                - 0.011369566002276678 * a_s * xi1 - 0.03239165548585615 * l1 * ec2
                - 0.034012714777191984 * l1p * ec2 + 0.03537355978014203 * l4 * ec2
                - 0.034012714777191984 * l1 * xi1 * ec2,
            -0.08953706088400629 - 0.12889154584954196 * a_s + 0.19875401710877047 * eb
                + 1.308634693764933 * chi3p * eb + 0.5442034364350717 * chi3pp * eb
                - 0.19875401710877047 * ec + 1.308634693764933 * chi2 * ec
                + 1.0884068728701435 * chi2p * ec - 3.9259040812947985 * chi3p * ec
                - 1.6326103093052151 * chi3pp * ec + 0.39750803421754094 * ec * eta
                + 0.5659769564822726 * ec * etap - 0.3271586734412332 * xi1
                - 0.2769029193553795 * a_s * xi1 + 0.2829884782411363 * eb * xi1
                + 1.0884068728701435 * chi3p * eb * xi1 - 0.2829884782411363 * ec * xi1
                + 1.0884068728701435 * chi2 * ec * xi1 - 3.2652206186104302 * chi3p * ec * xi1
                + 0.5659769564822726 * ec * eta * xi1 - 0.13605085910876794 * xi2
                - 0.045478264009106706 * a_s * xi2 - 0.08953706088400629 * l1 * ec2
                - 0.2591332438868492 * l1p * ec2 + 0.19875401710877047 * l4 * ec2
                + 0.2829884782411363 * l4p * ec2 - 0.3271586734412332 * l1 * xi1 * ec2
                - 0.27210171821753587 * l1p * xi1 * ec2 + 0.2829884782411363 * l4 * xi1 * ec2
                - 0.13605085910876794 * l1 * xi2 * ec2,
        ],
        BglFormFactor::T23Bar => [
            -0.011736355765674576 - 0.003923158512284266 * a_s - 0.011736355765674576 * l1 * ec2,
            -0.10038224120467253 - 0.1026870142411883 * a_s - 0.04694542306269827 * eb
                - 0.3755633845015864 * chi2 * eb + 0.37556338450158644 * chi3p * eb
                - 0.046945423062698305 * ec + 0.37556338450158644 * chi2 * ec
                - 1.1266901535047595 * chi3p * ec - 0.0938908461253966 * eb * eta
                + 0.09389084612539661 * ec * eta - 0.09389084612539661 * xi1
                - 0.031385268098274126 * a_s * xi1 - 0.10038224120467253 * l1 * ec2
                - 0.09389084612539661 * l1p * ec2 + 0.046945423062698305 * l4 * ec2
                - 0.09389084612539661 * l1 * xi1 * ec2,
            -0.34167893029244223 - 0.5546811615982133 * a_s - 0.30763811869329344 * eb
                - 3.9633584875526924 * chi2 * eb - 3.004507076012691 * chi2p * eb
                + 3.9633584875526937 * chi3p * eb + 1.5022535380063458 * chi3pp * eb
                - 0.30763811869329327 * ec + 3.9633584875526937 * chi2 * ec
                + 3.0045070760126915 * chi2p * ec - 11.89007546265808 * chi3p * ec
                - 4.506760614019037 * chi3pp * ec - 0.6152762373865869 * eb * eta
                + 0.6152762373865865 * ec * eta - 0.7511267690031728 * eb * etap
                + 0.7511267690031727 * ec * etap - 0.9908396218881734 * xi1
                - 0.8842666501260544 * a_s * xi1 - 0.37556338450158633 * eb * xi1
                - 3.004507076012691 * chi2 * eb * xi1 + 3.0045070760126915 * chi3p * eb * xi1
                - 0.37556338450158633 * ec * xi1 + 3.0045070760126915 * chi2 * ec * xi1
                - 9.013521228038075 * chi3p * ec * xi1 - 0.7511267690031728 * eb * eta * xi1
                + 0.7511267690031727 * ec * eta * xi1 - 0.37556338450158644 * xi2
                - 0.12554107239309648 * a_s * xi2 - 0.34167893029244223 * l1 * ec2
                - 0.8030579296373801 * l1p * ec2 + 0.30763811869329327 * l4 * ec2
                + 0.37556338450158633 * l4p * ec2 - 0.9908396218881734 * l1 * xi1 * ec2
                - 0.7511267690031729 * l1p * xi1 * ec2 + 0.37556338450158633 * l4 * xi1 * ec2
                - 0.37556338450158644 * l1 * xi2 * ec2,
        ],
        BglFormFactor::S2 => [
            0.03876949172451258 + 0.009719724621896759 * a_s + 0.03876949172451258 * l2 * ec2,
            0.2783004793038406 + 0.19603971918235066 * a_s - 0.34313631589659094 * eb
                - 1.2406237351844025 * chi3p * eb + 0.34313631589659094 * ec
                - 1.2406237351844025 * chi3p * ec + 0.3101559337961006 * xi1
                + 0.07775779697517408 * a_s * xi1 + 0.2783004793038406 * l2 * ec2
                + 0.3101559337961006 * l2p * ec2 - 0.34313631589659094 * l5 * ec2
                + 0.3101559337961006 * l2 * xi1 * ec2,
            0.7635413763985075 + 0.4936980746179209 * a_s - 1.7768755017738411 * eb
                - 11.386862808091704 * chi3p * eb - 4.96249494073761 * chi3pp * eb
                + 1.7768755017738411 * ec - 11.386862808091704 * chi3p * ec
                - 4.96249494073761 * chi3pp * ec + 2.846715702022926 * xi1
                + 1.7238333474091534 * a_s * xi1 - 2.7450905271727275 * eb * xi1
                - 9.92498988147522 * chi3p * eb * xi1 + 2.7450905271727275 * ec * xi1
                - 9.92498988147522 * chi3p * ec * xi1 + 1.2406237351844025 * xi2
                + 0.31103118790069634 * a_s * xi2 + 0.7635413763985075 * l2 * ec2
                + 2.226403834430725 * l2p * ec2 - 1.7768755017738411 * l5 * ec2
                - 2.7450905271727275 * l5p * ec2 + 2.846715702022926 * l2 * xi1 * ec2
                + 2.481247470368805 * l2p * xi1 * ec2 - 2.7450905271727275 * l5 * xi1 * ec2
                + 1.2406237351844025 * l2 * xi2 * ec2,
        ],
        BglFormFactor::S3 => [
            0.027414170501558584 + 0.006872883191409052 * a_s + 0.027414170501558584 * l2 * ec2,
            0.19678815612321215 + 0.1386210148157467 * a_s - 0.2426340158418488 * eb
                + 0.8772534560498747 * chi2 * eb - 0.8772534560498748 * chi3p * eb
                + 0.2426340158418488 * ec + 0.8772534560498747 * chi2 * ec
                - 0.8772534560498748 * chi3p * ec - 0.4852680316836975 * eb * eta
                + 0.4852680316836975 * ec * eta + 0.2193133640124687 * xi1
                + 0.05498306553127241 * a_s * xi1 + 0.19678815612321215 * l2 * ec2
                + 0.2193133640124687 * l2p * ec2 + 0.21931336401246868 * l3 * ec2
                + 0.24263401584184868 * l5 * ec2 - 0.4852680316836975 * l6 * ec2
                + 0.2193133640124687 * l2 * xi1 * ec2,
            0.5399052849678948 + 0.34909725642107414 * a_s - 1.2564407166285332 * eb
                + 8.051727908042537 * chi2 * eb + 7.018027648398997 * chi2p * eb
                - 8.051727908042537 * chi3p * eb - 3.509013824199499 * chi3pp * eb
                + 1.2564407166285332 * ec + 8.051727908042537 * chi2 * ec
                + 7.018027648398997 * chi2p * ec - 8.051727908042537 * chi3p * ec
                - 3.509013824199499 * chi3pp * ec - 2.5128814332570646 * eb * eta
                + 2.5128814332570646 * ec * eta - 3.88214425346958 * eb * etap
                + 3.88214425346958 * ec * etap + 2.012931977010634 * xi1
                + 1.2189342495885183 * a_s * xi1 - 1.9410721267347903 * eb * xi1
                + 7.018027648398997 * chi2 * eb * xi1 - 7.018027648398998 * chi3p * eb * xi1
                + 1.9410721267347903 * ec * xi1 + 7.018027648398997 * chi2 * ec * xi1
                - 7.018027648398998 * chi3p * ec * xi1 - 3.88214425346958 * eb * eta * xi1
                + 3.88214425346958 * ec * eta * xi1 + 0.8772534560498747 * xi2
                + 0.21993226212508965 * a_s * xi2 + 0.5399052849678948 * l2 * ec2
                + 1.5743052489856972 * l2p * ec2 + 2.012931977010634 * l3 * ec2
                + 1.7545069120997492 * l3p * ec2 + 1.2564407166285314 * l5 * ec2
                + 1.9410721267347895 * l5p * ec2 - 4.453953559991855 * l6 * ec2
                - 3.88214425346958 * l6p * ec2 + 2.012931977010634 * l2 * xi1 * ec2
                + 1.7545069120997494 * l2p * xi1 * ec2 + 1.7545069120997492 * l3 * xi1 * ec2
                + 1.9410721267347895 * l5 * xi1 * ec2 - 3.88214425346958 * l6 * xi1 * ec2
                + 0.8772534560498747 * l2 * xi2 * ec2,
        ],
        BglFormFactor::P3 => [
            0.036840326316375654 - 0.0022102022896583733 * a_s - 0.016649718028464256 * eb
                + 0.016649718028464256 * ec + 0.036840326316375654 * l2 * ec2
                - 0.016649718028464256 * l5 * ec2,
            0.3236923482372954 - 0.050095453298419586 * a_s - 0.1462904068720701 * eb
                - 1.1788904421240212 * chi3p * eb + 0.1462904068720701 * ec
                - 1.1788904421240212 * chi3p * ec + 0.2947226105310053 * xi1
                - 0.017681618317266987 * a_s * xi1 - 0.13319774422771405 * eb * xi1
                + 0.13319774422771405 * ec * xi1 + 0.3236923482372954 * l2 * ec2
                + 0.2947226105310053 * l2p * ec2 - 0.1462904068720701 * l5 * ec2
                - 0.13319774422771405 * l5p * ec2 + 0.2947226105310053 * l2 * xi1 * ec2
                - 0.13319774422771405 * l5 * xi1 * ec2,
            1.0139125139266247 - 0.7049681479226149 * a_s - 0.4582303999545686 * eb
                - 12.715936027841494 * chi3p * eb - 4.715561768496084 * chi3pp * eb
                + 0.4582303999545686 * ec - 12.715936027841494 * chi3p * ec
                - 4.715561768496084 * chi3pp * ec + 3.1789840069603734 * xi1
                - 0.4361268630218906 * a_s * xi1 - 1.436718743431989 * eb * xi1
                - 9.431123536992168 * chi3p * eb * xi1 + 1.436718743431989 * ec * xi1
                - 9.431123536992168 * chi3p * ec * xi1 + 1.178890442124021 * xi2
                - 0.07072647326906795 * a_s * xi2 - 0.5327909769108561 * eb * xi2
                + 0.5327909769108561 * ec * xi2 + 1.0139125139266247 * l2 * ec2
                + 2.589538785898363 * l2p * ec2 - 0.4582303999545686 * l5 * ec2
                - 1.1703232549765608 * l5p * ec2 + 3.1789840069603734 * l2 * xi1 * ec2
                + 2.357780884248042 * l2p * xi1 * ec2 - 1.436718743431989 * l5 * xi1 * ec2
                - 1.0655819538217122 * l5p * xi1 * ec2 + 1.178890442124021 * l2 * xi2 * ec2
                - 0.5327909769108561 * l5 * xi2 * ec2,
        ],
        BglFormFactor::V2 => [
            0.007335151340155248 + 0.0027093201917110336 * a_s - 0.0033150683970844786 * eb
                + 0.0033150683970844786 * ec + 0.007335151340155248 * l2 * ec2
                - 0.0033150683970844786 * l5 * ec2,
            0.061094733790494654 + 0.02865790830563056 * a_s - 0.02761132140633808 * eb
                - 0.23472484288496795 * chi3p * eb + 0.02761132140633808 * ec
                - 0.23472484288496795 * chi3p * ec + 0.05868121072124199 * xi1
                + 0.02167456153368827 * a_s * xi1 - 0.02652054717667583 * eb * xi1
                + 0.02652054717667583 * ec * xi1 + 0.061094733790494654 * l2 * ec2
                + 0.05868121072124199 * l2p * ec2 - 0.02761132140633808 * l5 * ec2
                - 0.02652054717667583 * l5p * ec2 + 0.05868121072124199 * l2 * xi1 * ec2
                - 0.02652054717667583 * l5 * xi1 * ec2,
            0.16740988852041994 + 0.0445707187184837 * a_s - 0.07565968376894235 * eb
                - 2.424481167065765 * chi3p * eb - 0.9388993715398718 * chi3pp * eb
                + 0.07565968376894235 * ec - 2.424481167065765 * chi3p * ec
                - 0.9388993715398718 * chi3pp * ec + 0.6061202917664412 * xi1
                + 0.272612389512421 * a_s * xi1 - 0.2739316656040563 * eb * xi1
                - 1.8777987430797436 * chi3p * eb * xi1 + 0.2739316656040563 * ec * xi1
                - 1.8777987430797436 * chi3p * ec * xi1 + 0.23472484288496795 * xi2
                + 0.08669824613475308 * a_s * xi2 - 0.10608218870670331 * eb * xi2
                + 0.10608218870670331 * ec * xi2 + 0.16740988852041994 * l2 * ec2
                + 0.48875787032395723 * l2p * ec2 - 0.07565968376894235 * l5 * ec2
                - 0.2208905712507046 * l5p * ec2 + 0.6061202917664412 * l2 * xi1 * ec2
                + 0.4694496857699359 * l2p * xi1 * ec2 - 0.2739316656040563 * l5 * xi1 * ec2
                - 0.21216437741340663 * l5p * xi1 * ec2 + 0.23472484288496795 * l2 * xi2 * ec2
                - 0.10608218870670331 * l5 * xi2 * ec2,
        ],
        BglFormFactor::V3 => [
            0.00518673525365337 + 0.0019157786799645093 * a_s - 0.0023441073436756537 * eb
                + 0.0023441073436756537 * ec - 0.004688214687351307 * eb * eta
                + 0.004688214687351307 * ec * eta + 0.00518673525365337 * l2 * ec2
                + 0.0023441073436756537 * l5 * ec2 - 0.004688214687351307 * l6 * ec2,
            0.04320050055804569 + 0.020264201297533653 * a_s - 0.019524152603942933 * eb
                + 0.16597552811690783 * chi2 * eb - 0.16597552811690783 * chi3p * eb
                + 0.019524152603942933 * ec + 0.16597552811690783 * chi2 * ec
                - 0.16597552811690783 * chi3p * ec - 0.039048305207885874 * eb * eta
                + 0.039048305207885874 * ec * eta - 0.037505717498810466 * eb * etap
                + 0.037505717498810466 * ec * etap + 0.04149388202922696 * xi1
                + 0.015326229439716075 * a_s * xi1 - 0.01875285874940523 * eb * xi1
                + 0.01875285874940523 * ec * xi1 - 0.037505717498810466 * eb * eta * xi1
                + 0.037505717498810466 * ec * eta * xi1 + 0.04320050055804569 * l2 * ec2
                + 0.04149388202922696 * l2p * ec2 + 0.04149388202922696 * l3 * ec2
                + 0.01952415260394294 * l5 * ec2 + 0.018752858749405237 * l5p * ec2
                - 0.05780116395729111 * l6 * ec2 - 0.037505717498810466 * l6p * ec2
                + 0.04149388202922696 * l2 * xi1 * ec2 + 0.018752858749405237 * l5 * xi1 * ec2
                - 0.037505717498810466 * l6 * xi1 * ec2,
            0.11837666741047292 + 0.03151625744819802 * a_s - 0.05349947545544891 * eb
                + 1.7143670740912775 * chi2 * eb + 1.3278042249352626 * chi2p * eb
                - 1.7143670740912775 * chi3p * eb - 0.6639021124676313 * chi3pp * eb
                + 0.05349947545544891 * ec + 1.7143670740912775 * chi2 * ec
                + 1.3278042249352626 * chi2p * ec - 1.7143670740912775 * chi3p * ec
                - 0.6639021124676313 * chi3pp * ec - 0.10699895091089782 * eb * eta
                + 0.10699895091089782 * ec * eta - 0.38739787666070796 * eb * etap
                + 0.38739787666070796 * ec * etap - 0.15002286999524184 * eb * etapp
                + 0.15002286999524184 * ec * etapp + 0.4285917685228194 * xi1
                + 0.19276606925970147 * a_s * xi1 - 0.19369893833035395 * eb * xi1
                + 1.3278042249352626 * chi2 * eb * xi1 - 1.3278042249352626 * chi3p * eb * xi1
                + 0.19369893833035395 * ec * xi1 + 1.3278042249352626 * chi2 * ec * xi1
                - 1.3278042249352626 * chi3p * ec * xi1 - 0.38739787666070796 * eb * eta * xi1
                + 0.38739787666070796 * ec * eta * xi1 - 0.3000457399904837 * eb * etap * xi1
                + 0.3000457399904837 * ec * etap * xi1 + 0.16597552811690783 * xi2
                + 0.0613049177588643 * a_s * xi2 - 0.07501143499762092 * eb * xi2
                + 0.07501143499762092 * ec * xi2 - 0.15002286999524184 * eb * eta * xi2
                + 0.15002286999524184 * ec * eta * xi2 + 0.11837666741047292 * l2 * ec2
                + 0.34560400446436546 * l2p * ec2 + 0.4285917685228194 * l3 * ec2
                + 0.33195105623381566 * l3p * ec2 + 0.05349947545544891 * l5 * ec2
                + 0.15619322083154355 * l5p * ec2 - 0.3006978892412518 * l6 * ec2
                - 0.46240931165832894 * l6p * ec2 + 0.4285917685228194 * l2 * xi1 * ec2
                + 0.33195105623381566 * l2p * xi1 * ec2 + 0.33195105623381566 * l3 * xi1 * ec2
                + 0.19369893833035398 * l5 * xi1 * ec2 + 0.15002286999524184 * l5p * xi1 * ec2
                - 0.5374207466559499 * l6 * xi1 * ec2 - 0.3000457399904837 * l6p * xi1 * ec2
                + 0.16597552811690783 * l2 * xi2 * ec2 + 0.07501143499762092 * l5 * xi2 * ec2
                - 0.15002286999524184 * l6 * xi2 * ec2,
        ],
        BglFormFactor::V6 => [
            0.006543299374599415 + 0.006002640693093107 * a_s + 0.006543299374599415 * eb
                + 0.006543299374599415 * ec + 0.01308659874919883 * ec * eta
                + 0.006543299374599415 * l2 * ec2 + 0.006543299374599415 * l5 * ec2
                - 0.01308659874919883 * l6 * ec2,
            0.05449937088744518 + 0.060277889384701494 * a_s + 0.05449937088744518 * eb
                - 0.20938557998718127 * chi3p * eb + 0.05449937088744518 * ec
                + 0.20938557998718127 * chi2 * ec - 0.20938557998718127 * chi3p * ec
                + 0.10899874177489036 * ec * eta + 0.10469278999359063 * ec * etap
                + 0.05234639499679532 * xi1 + 0.048021125544744865 * a_s * xi1
                + 0.05234639499679532 * eb * xi1 + 0.05234639499679532 * ec * xi1
                + 0.10469278999359063 * ec * eta * xi1 + 0.05449937088744518 * l2 * ec2
                + 0.05234639499679532 * l2p * ec2 + 0.05234639499679532 * l3 * ec2
                + 0.05449937088744518 * l5 * ec2 + 0.05234639499679532 * l5p * ec2
                - 0.1613451367716857 * l6 * ec2 - 0.10469278999359063 * l6p * ec2
                + 0.05234639499679532 * l2 * xi1 * ec2 + 0.05234639499679532 * l5 * xi1 * ec2
                - 0.10469278999359063 * l6 * xi1 * ec2,
            0.1493374803135605 + 0.16396744598754961 * a_s + 0.1493374803135605 * eb
                - 2.1627510283726084 * chi3p * eb - 0.8375423199487251 * chi3pp * eb
                + 0.1493374803135605 * ec + 2.1627510283726084 * chi2 * ec
                + 1.6750846398974502 * chi2p * ec - 2.1627510283726084 * chi3p * ec
                - 0.8375423199487251 * chi3pp * ec + 0.298674960627121 * ec * eta
                + 1.0813755141863042 * ec * etap + 0.41877115997436254 * ec * etapp
                + 0.5406877570931521 * xi1 + 0.5782653661671017 * a_s * xi1
                + 0.5406877570931521 * eb * xi1 - 1.6750846398974502 * chi3p * eb * xi1
                + 0.5406877570931521 * ec * xi1 + 1.6750846398974502 * chi2 * ec * xi1
                - 1.6750846398974502 * chi3p * ec * xi1 + 1.0813755141863042 * ec * eta * xi1
                + 0.8375423199487251 * ec * etap * xi1 + 0.20938557998718127 * xi2
                + 0.19208450217897946 * a_s * xi2 + 0.20938557998718127 * eb * xi2
                + 0.20938557998718127 * ec * xi2 + 0.41877115997436254 * ec * eta * xi2
                + 0.1493374803135605 * l2 * ec2 + 0.4359949670995614 * l2p * ec2
                + 0.5406877570931521 * l3 * ec2 + 0.41877115997436254 * l3p * ec2
                + 0.1493374803135605 * l5 * ec2 + 0.4359949670995614 * l5p * ec2
                - 0.839362717720273 * l6 * ec2 - 1.2907610941734855 * l6p * ec2
                + 0.5406877570931521 * l2 * xi1 * ec2 + 0.41877115997436254 * l2p * xi1 * ec2
                + 0.41877115997436254 * l3 * xi1 * ec2 + 0.5406877570931521 * l5 * xi1 * ec2
                + 0.41877115997436254 * l5p * xi1 * ec2 - 1.5001466741606668 * l6 * xi1 * ec2
                - 0.8375423199487251 * l6p * xi1 * ec2 + 0.20938557998718127 * l2 * xi2 * ec2
                + 0.20938557998718127 * l5 * xi2 * ec2 - 0.41877115997436254 * l6 * xi2 * ec2,
        ],
        BglFormFactor::V7 => [
            0.006543299374599415 + 0.006002640693093107 * a_s + 0.006543299374599415 * eb
                + 0.006543299374599415 * ec + 0.01308659874919883 * eb * eta
                + 0.006543299374599415 * l2 * ec2 - 0.006543299374599415 * l5 * ec2,
            0.05449937088744518 + 0.060277889384701494 * a_s + 0.05449937088744518 * eb
                + 0.20938557998718127 * chi2 * eb - 0.20938557998718127 * chi3p * eb
                + 0.05449937088744518 * ec - 0.20938557998718127 * chi3p * ec
                + 0.10899874177489036 * eb * eta + 0.10469278999359063 * eb * etap
                + 0.05234639499679532 * xi1 + 0.048021125544744865 * a_s * xi1
                + 0.05234639499679532 * eb * xi1 + 0.05234639499679532 * ec * xi1
                + 0.10469278999359063 * eb * eta * xi1 + 0.05449937088744518 * l2 * ec2
                + 0.05234639499679532 * l2p * ec2 - 0.05449937088744518 * l5 * ec2
                - 0.05234639499679532 * l5p * ec2 + 0.05234639499679532 * l2 * xi1 * ec2
                - 0.05234639499679532 * l5 * xi1 * ec2,
            0.1493374803135605 + 0.16396744598754961 * a_s + 0.1493374803135605 * eb
                + 2.1627510283726084 * chi2 * eb + 1.6750846398974502 * chi2p * eb
                - 2.1627510283726084 * chi3p * eb - 0.8375423199487251 * chi3pp * eb
                + 0.1493374803135605 * ec - 2.1627510283726084 * chi3p * ec
                - 0.8375423199487251 * chi3pp * ec + 0.298674960627121 * eb * eta
                + 1.0813755141863042 * eb * etap + 0.41877115997436254 * eb * etapp
                + 0.5406877570931521 * xi1 + 0.5782653661671017 * a_s * xi1
                + 0.5406877570931521 * eb * xi1 + 1.6750846398974502 * chi2 * eb * xi1
                - 1.6750846398974502 * chi3p * eb * xi1 + 0.5406877570931521 * ec * xi1
                - 1.6750846398974502 * chi3p * ec * xi1 + 1.0813755141863042 * eb * eta * xi1
                + 0.8375423199487251 * eb * etap * xi1 + 0.20938557998718127 * xi2
                + 0.19208450217897946 * a_s * xi2 + 0.20938557998718127 * eb * xi2
                + 0.20938557998718127 * ec * xi2 + 0.41877115997436254 * eb * eta * xi2
                + 0.1493374803135605 * l2 * ec2 + 0.4359949670995614 * l2p * ec2
                - 0.1493374803135605 * l5 * ec2 - 0.4359949670995614 * l5p * ec2
                + 0.5406877570931521 * l2 * xi1 * ec2 + 0.41877115997436254 * l2p * xi1 * ec2
                - 0.5406877570931521 * l5 * xi1 * ec2 - 0.41877115997436254 * l5p * xi1 * ec2
                + 0.20938557998718127 * l2 * xi2 * ec2 - 0.20938557998718127 * l5 * xi2 * ec2,
        ],
        BglFormFactor::A3 => [
            0.006711208710683108 - 0.002791602237175056 * a_s + 0.006711208710683108 * l2 * ec2,
            0.06881919420215553 + 0.005781487474467088 * a_s + 0.02684483484273243 * eb
                + 0.21475867874185944 * chi2 * eb - 0.21475867874185944 * chi3p * eb
                + 0.02684483484273243 * ec - 0.21475867874185944 * chi3p * ec
                + 0.05368966968546486 * eb * eta + 0.05368966968546486 * xi1
                - 0.02233281789740045 * a_s * xi1 + 0.06881919420215553 * l2 * ec2
                + 0.05368966968546486 * l2p * ec2 - 0.02684483484273243 * l5 * ec2
                + 0.05368966968546486 * l2 * xi1 * ec2,
            0.28459648348892935 + 0.1456399881376694 * a_s + 0.22158710712315724 * eb
                + 2.6317315719526957 * chi2 * eb + 1.7180694299348755 * chi2p * eb
                - 2.6317315719526957 * chi3p * eb - 0.8590347149674378 * chi3pp * eb
                + 0.22158710712315724 * ec - 2.6317315719526957 * chi3p * ec
                - 0.8590347149674378 * chi3pp * ec + 0.4431742142463145 * eb * eta
                + 0.4295173574837189 * eb * etap + 0.6579328929881739 * xi1
                + 0.0015862640009358159 * a_s * xi1 + 0.21475867874185944 * eb * xi1
                + 1.7180694299348755 * chi2 * eb * xi1 - 1.7180694299348755 * chi3p * eb * xi1
                + 0.21475867874185944 * ec * xi1 - 1.7180694299348755 * chi3p * ec * xi1
                + 0.4295173574837189 * eb * eta * xi1 + 0.21475867874185944 * xi2
                - 0.0893312715896018 * a_s * xi2 + 0.28459648348892935 * l2 * ec2
                + 0.5505535536172442 * l2p * ec2 - 0.22158710712315724 * l5 * ec2
                - 0.21475867874185944 * l5p * ec2 + 0.6579328929881739 * l2 * xi1 * ec2
                + 0.4295173574837189 * l2p * xi1 * ec2 - 0.21475867874185944 * l5 * xi1 * ec2
                + 0.21475867874185944 * l2 * xi2 * ec2,
        ],
        BglFormFactor::A4 => [
            0.006711208710683108 - 0.002791602237175056 * a_s + 0.006711208710683108 * l2 * ec2,
            0.06881919420215553 + 0.005781487474467088 * a_s + 0.02684483484273243 * eb
                - 0.21475867874185944 * chi3p * eb + 0.02684483484273243 * ec
                + 0.21475867874185944 * chi2 * ec - 0.21475867874185944 * chi3p * ec
                + 0.05368966968546486 * ec * eta + 0.05368966968546486 * xi1
                - 0.02233281789740045 * a_s * xi1 + 0.06881919420215553 * l2 * ec2
                + 0.05368966968546486 * l2p * ec2 + 0.05368966968546486 * l3 * ec2
                + 0.02684483484273243 * l5 * ec2 - 0.05368966968546486 * l6 * ec2
                + 0.05368966968546486 * l2 * xi1 * ec2,
            0.28459648348892935 + 0.1456399881376694 * a_s + 0.22158710712315724 * eb
                - 2.6317315719526957 * chi3p * eb - 0.8590347149674378 * chi3pp * eb
                + 0.22158710712315724 * ec + 2.6317315719526957 * chi2 * ec
                + 1.7180694299348755 * chi2p * ec - 2.6317315719526957 * chi3p * ec
                - 0.8590347149674378 * chi3pp * ec + 0.4431742142463145 * ec * eta
                + 0.4295173574837189 * ec * etap + 0.6579328929881739 * xi1
                + 0.0015862640009358714 * a_s * xi1 + 0.21475867874185944 * eb * xi1
                - 1.7180694299348755 * chi3p * eb * xi1 + 0.21475867874185944 * ec * xi1
                + 1.7180694299348755 * chi2 * ec * xi1 - 1.7180694299348755 * chi3p * ec * xi1
                + 0.4295173574837189 * ec * eta * xi1 + 0.21475867874185944 * xi2
                - 0.0893312715896018 * a_s * xi2 + 0.28459648348892935 * l2 * ec2
                + 0.5505535536172442 * l2p * ec2 + 0.6579328929881739 * l3 * ec2
                + 0.4295173574837189 * l3p * ec2 + 0.22158710712315724 * l5 * ec2
                + 0.21475867874185944 * l5p * ec2 - 0.6579328929881739 * l6 * ec2
                - 0.4295173574837189 * l6p * ec2 + 0.6579328929881739 * l2 * xi1 * ec2
                + 0.4295173574837189 * l2p * xi1 * ec2 + 0.4295173574837189 * l3 * xi1 * ec2
                + 0.21475867874185944 * l5 * xi1 * ec2 - 0.4295173574837189 * l6 * xi1 * ec2
                + 0.21475867874185944 * l2 * xi2 * ec2,
        ],
        BglFormFactor::A7 => [
            0.006412276517110341 - 0.0026672580517509013 * a_s + 0.006412276517110341 * l2 * ec2,
            0.05329514115021218 + 0.013900622461986156 * a_s - 0.05675299940030692 * eb
                - 0.20519284854753092 * chi3p * eb + 0.05675299940030692 * ec
                - 0.20519284854753092 * chi3p * ec + 0.05129821213688273 * xi1
                - 0.021338064414007214 * a_s * xi1 + 0.05329514115021218 * l2 * ec2
                + 0.05129821213688273 * l2p * ec2 - 0.05675299940030692 * l5 * ec2
                + 0.05129821213688273 * l2 * xi1 * ec2,
            0.1562776264382128 + 0.14297208702450237 * a_s - 0.35819217355149036 * eb
                - 2.115830213901852 * chi3p * eb - 0.8207713941901237 * chi3pp * eb
                + 0.35819217355149036 * ec - 2.115830213901852 * chi3p * ec
                - 0.8207713941901237 * chi3pp * ec + 0.528957553475463 * xi1
                + 0.06852885086787484 * a_s * xi1 - 0.4540239952024553 * eb * xi1
                - 1.6415427883802474 * chi3p * eb * xi1 + 0.4540239952024553 * ec * xi1
                - 1.6415427883802474 * chi3p * ec * xi1 + 0.20519284854753092 * xi2
                - 0.08535225765602886 * a_s * xi2 + 0.1562776264382128 * l2 * ec2
                + 0.4263611292016975 * l2p * ec2 - 0.35819217355149036 * l5 * ec2
                - 0.4540239952024553 * l5p * ec2 + 0.528957553475463 * l2 * xi1 * ec2
                + 0.41038569709506184 * l2p * xi1 * ec2 - 0.4540239952024553 * l5 * xi1 * ec2
                + 0.20519284854753092 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T4 => [
            0.007954146388511356 + 0.002658864279089947 * a_s + 0.007954146388511356 * l2 * ec2,
            0.08156473276594307 + 0.07411808069728959 * a_s + 0.03181658555404542 * eb
                - 0.2545326844323634 * chi3p * eb + 0.03181658555404542 * ec
                - 0.2545326844323634 * chi3p * ec + 0.06363317110809084 * xi1
                + 0.021270914232719575 * a_s * xi1 + 0.08156473276594307 * l2 * ec2
                + 0.06363317110809084 * l2p * ec2 - 0.03181658555404542 * l5 * ec2
                + 0.06363317110809084 * l2 * xi1 * ec2,
            0.3373046777286239 + 0.4909817757126442 * a_s + 0.26262575995568144 * eb
                - 3.1191368173749052 * chi3p * eb - 1.0181307377294535 * chi3pp * eb
                + 0.26262575995568144 * ec - 3.1191368173749052 * chi3p * ec
                - 1.0181307377294535 * chi3pp * ec + 0.7797842043437263 * xi1
                + 0.6354864740437558 * a_s * xi1 + 0.2545326844323634 * eb * xi1
                - 2.036261475458907 * chi3p * eb * xi1 + 0.2545326844323634 * ec * xi1
                - 2.036261475458907 * chi3p * ec * xi1 + 0.2545326844323634 * xi2
                + 0.0850836569308783 * a_s * xi2 + 0.3373046777286239 * l2 * ec2
                + 0.6525178621275446 * l2p * ec2 - 0.26262575995568144 * l5 * ec2
                - 0.2545326844323634 * l5p * ec2 + 0.7797842043437263 * l2 * xi1 * ec2
                + 0.5090653688647268 * l2p * xi1 * ec2 - 0.2545326844323634 * l5 * xi1 * ec2
                + 0.2545326844323634 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T5 => [
            0.0018999627451430382 + 0.0006351081345396198 * a_s + 0.0018999627451430382 * l2 * ec2,
            0.017691356396422223 + 0.01580208901755895 * a_s - 0.016815959861989967 * eb
                - 0.06079880784457723 * chi3p * eb + 0.016815959861989967 * ec
                + 0.06079880784457723 * chi2 * ec - 0.06079880784457723 * chi3p * ec
                + 0.033631919723979935 * ec * eta + 0.015199701961144308 * xi1
                + 0.0050808650763169575 * a_s * xi1 + 0.017691356396422223 * l2 * ec2
                + 0.015199701961144308 * l2p * ec2 + 0.015199701961144308 * l3 * ec2
                + 0.016815959861989967 * l5 * ec2 - 0.033631919723979935 * l6 * ec2
                + 0.015199701961144308 * l2 * xi1 * ec2,
            0.062096581417229 + 0.08515196368715783 * a_s - 0.1229485920923181 * eb
                - 0.6877210203746656 * chi3p * eb - 0.24319523137830895 * chi3pp * eb
                + 0.1229485920923181 * ec + 0.6877210203746656 * chi2 * ec
                + 0.4863904627566179 * chi2p * ec - 0.6877210203746656 * chi3p * ec
                - 0.24319523137830895 * chi3pp * ec + 0.2458971841846362 * ec * eta
                + 0.2690553577918395 * ec * etap + 0.1719302550936664 * xi1
                + 0.1365784422931055 * a_s * xi1 - 0.13452767889591974 * eb * xi1
                - 0.4863904627566179 * chi3p * eb * xi1 + 0.13452767889591974 * ec * xi1
                + 0.4863904627566179 * chi2 * ec * xi1 - 0.4863904627566179 * chi3p * ec * xi1
                + 0.2690553577918395 * ec * eta * xi1 + 0.06079880784457724 * xi2
                + 0.020323460305267833 * a_s * xi2 + 0.062096581417229 * l2 * ec2
                + 0.1415308511713778 * l2p * ec2 + 0.1719302550936664 * l3 * ec2
                + 0.12159761568915448 * l3p * ec2 + 0.1229485920923181 * l5 * ec2
                + 0.13452767889591974 * l5p * ec2 - 0.38042486308055595 * l6 * ec2
                - 0.2690553577918395 * l6p * ec2 + 0.1719302550936664 * l2 * xi1 * ec2
                + 0.12159761568915448 * l2p * xi1 * ec2 + 0.12159761568915448 * l3 * xi1 * ec2
                + 0.13452767889591974 * l5 * xi1 * ec2 - 0.2690553577918395 * l6 * xi1 * ec2
                + 0.06079880784457724 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T6 => [
            0.0018999627451430382 + 0.0006351081345396198 * a_s + 0.0018999627451430382 * l2 * ec2,
            0.017691356396422223 + 0.01580208901755895 * a_s - 0.016815959861989964 * eb
                + 0.060798807844577224 * chi2 * eb - 0.060798807844577224 * chi3p * eb
                + 0.01681595986198997 * ec - 0.060798807844577224 * chi3p * ec
                - 0.033631919723979935 * eb * eta + 0.015199701961144306 * xi1
                + 0.005080865076316958 * a_s * xi1 + 0.017691356396422223 * l2 * ec2
                + 0.015199701961144306 * l2p * ec2 - 0.01681595986198997 * l5 * ec2
                + 0.015199701961144306 * l2 * xi1 * ec2,
            0.062096581417229 + 0.08515196368715786 * a_s - 0.1229485920923181 * eb
                + 0.6877210203746656 * chi2 * eb + 0.4863904627566179 * chi2p * eb
                - 0.6877210203746656 * chi3p * eb - 0.24319523137830895 * chi3pp * eb
                + 0.1229485920923181 * ec - 0.6877210203746656 * chi3p * ec
                - 0.24319523137830895 * chi3pp * ec - 0.2458971841846362 * eb * eta
                - 0.2690553577918395 * eb * etap + 0.1719302550936664 * xi1
                + 0.13657844229310553 * a_s * xi1 - 0.1345276788959197 * eb * xi1
                + 0.4863904627566179 * chi2 * eb * xi1 - 0.4863904627566179 * chi3p * eb * xi1
                + 0.13452767889591974 * ec * xi1 - 0.4863904627566179 * chi3p * ec * xi1
                - 0.2690553577918395 * eb * eta * xi1 + 0.06079880784457724 * xi2
                + 0.020323460305267833 * a_s * xi2 + 0.062096581417229 * l2 * ec2
                + 0.1415308511713778 * l2p * ec2 - 0.1229485920923181 * l5 * ec2
                - 0.13452767889591974 * l5p * ec2 + 0.1719302550936664 * l2 * xi1 * ec2
                + 0.12159761568915448 * l2p * xi1 * ec2 - 0.13452767889591974 * l5 * xi1 * ec2
                + 0.06079880784457724 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T7 => [
            0.014082253085597513 + 0.023483668425490135 * a_s + 0.014082253085597513 * eb
                + 0.014082253085597513 * ec + 0.014082253085597513 * l2 * ec2
                - 0.014082253085597513 * l5 * ec2,
            0.13057035472750284 + 0.2506199645069021 * a_s + 0.13057035472750284 * eb
                - 0.4506320987391204 * chi3p * eb + 0.13057035472750284 * ec
                - 0.4506320987391204 * chi3p * ec + 0.1126580246847801 * xi1
                + 0.1878693474039211 * a_s * xi1 + 0.1126580246847801 * eb * xi1
                + 0.1126580246847801 * ec * xi1 + 0.13057035472750284 * l2 * ec2
                + 0.1126580246847801 * l2p * ec2 - 0.13057035472750284 * l5 * ec2
                - 0.1126580246847801 * l5p * ec2 + 0.1126580246847801 * l2 * xi1 * ec2
                - 0.1126580246847801 * l5 * xi1 * ec2,
            0.44527688302044277 + 0.9265206779774454 * a_s + 0.44527688302044277 * eb
                - 5.079515548758332 * chi3p * eb - 1.8025283949564816 * chi3pp * eb
                + 0.44527688302044277 * ec - 5.079515548758332 * chi3p * ec
                - 1.8025283949564816 * chi3pp * ec + 1.269878887189583 * xi1
                + 2.380698410863059 * a_s * xi1 + 1.269878887189583 * eb * xi1
                - 3.6050567899129633 * chi3p * eb * xi1 + 1.269878887189583 * ec * xi1
                - 3.6050567899129633 * chi3p * ec * xi1 + 0.4506320987391204 * xi2
                + 0.7514773896156844 * a_s * xi2 + 0.4506320987391204 * eb * xi2
                + 0.4506320987391204 * ec * xi2 + 0.44527688302044277 * l2 * ec2
                + 1.0445628378200227 * l2p * ec2 - 0.44527688302044277 * l5 * ec2
                - 1.0445628378200227 * l5p * ec2 + 1.269878887189583 * l2 * xi1 * ec2
                + 0.9012641974782408 * l2p * xi1 * ec2 - 1.269878887189583 * l5 * xi1 * ec2
                - 0.9012641974782408 * l5p * xi1 * ec2 + 0.4506320987391204 * l2 * xi2 * ec2
                - 0.4506320987391204 * l5 * xi2 * ec2,
        ],
        BglFormFactor::T8 => [
            0.007442866622238243 + 0.004254233697022471 * a_s - 0.0033637495368397784 * eb
                + 0.0033637495368397784 * ec - 0.006727499073679558 * eb * eta
                + 0.007442866622238243 * l2 * ec2 - 0.0033637495368397784 * l5 * ec2,
            0.061991898167731534 + 0.041108351567110284 * a_s - 0.028016788333473753 * eb
                + 0.23817173191162377 * chi2 * eb - 0.23817173191162377 * chi3p * eb
                + 0.028016788333473753 * ec - 0.23817173191162377 * chi3p * ec
                - 0.05603357666694753 * eb * eta - 0.05381999258943646 * eb * etap
                + 0.059542932977905944 * xi1 + 0.034033869576179765 * a_s * xi1
                - 0.026909996294718228 * eb * xi1 + 0.026909996294718228 * ec * xi1
                - 0.05381999258943646 * eb * eta * xi1 + 0.061991898167731534 * l2 * ec2
                + 0.059542932977905944 * l2p * ec2 - 0.028016788333473753 * l5 * ec2
                - 0.026909996294718228 * l5p * ec2 + 0.059542932977905944 * l2 * xi1 * ec2
                - 0.026909996294718228 * l5 * xi1 * ec2,
            0.1698682704309257 + 0.07485642073680311 * a_s - 0.07677073162624659 * eb
                + 2.4600842051906566 * chi2 * eb + 1.9053738552929902 * chi2p * eb
                - 2.4600842051906566 * chi3p * eb - 0.9526869276464951 * chi3pp * eb
                + 0.07677073162624659 * ec - 2.4600842051906566 * chi3p * ec
                - 0.9526869276464951 * chi3pp * ec - 0.1535414632524932 * eb * eta
                - 0.5559085985144531 * eb * etap - 0.21527997035774585 * eb * etapp
                + 0.6150210512976642 * xi1 + 0.39693455168924174 * a_s * xi1
                - 0.2779542992572265 * eb * xi1 + 1.9053738552929902 * chi2 * eb * xi1
                - 1.9053738552929902 * chi3p * eb * xi1 + 0.2779542992572265 * ec * xi1
                - 1.9053738552929902 * chi3p * ec * xi1 - 0.5559085985144531 * eb * eta * xi1
                - 0.4305599407154917 * eb * etap * xi1 + 0.23817173191162377 * xi2
                + 0.13613547830471906 * a_s * xi2 - 0.10763998517887292 * eb * xi2
                + 0.10763998517887292 * ec * xi2 - 0.21527997035774585 * eb * eta * xi2
                + 0.1698682704309257 * l2 * ec2 + 0.49593518534185227 * l2p * ec2
                - 0.07677073162624659 * l5 * ec2 - 0.22413430666779002 * l5p * ec2
                + 0.6150210512976642 * l2 * xi1 * ec2 + 0.47634346382324755 * l2p * xi1 * ec2
                - 0.2779542992572265 * l5 * xi1 * ec2 - 0.21527997035774585 * l5p * xi1 * ec2
                + 0.23817173191162377 * l2 * xi2 * ec2 - 0.10763998517887292 * l5 * xi2 * ec2,
        ],
        BglFormFactor::T9 => [
            0.007442866622238245 + 0.00425423369702247 * a_s - 0.0033637495368397793 * eb
                + 0.0033637495368397793 * ec + 0.006727499073679559 * ec * eta
                + 0.007442866622238245 * l2 * ec2 + 0.0033637495368397793 * l5 * ec2
                - 0.006727499073679559 * l6 * ec2,
            0.061991898167731534 + 0.04110835156711028 * a_s - 0.028016788333473763 * eb
                - 0.23817173191162383 * chi3p * eb + 0.028016788333473763 * ec
                + 0.23817173191162383 * chi2 * ec - 0.23817173191162383 * chi3p * ec
                + 0.05603357666694753 * ec * eta + 0.05381999258943647 * ec * etap
                + 0.05954293297790596 * xi1 + 0.03403386957617976 * a_s * xi1
                - 0.026909996294718234 * eb * xi1 + 0.026909996294718234 * ec * xi1
                + 0.05381999258943647 * ec * eta * xi1 + 0.061991898167731534 * l2 * ec2
                + 0.05954293297790596 * l2p * ec2 + 0.05954293297790596 * l3 * ec2
                + 0.028016788333473763 * l5 * ec2 + 0.026909996294718234 * l5p * ec2
                - 0.08294357296166577 * l6 * ec2 - 0.05381999258943647 * l6p * ec2
                + 0.05954293297790596 * l2 * xi1 * ec2 + 0.026909996294718234 * l5 * xi1 * ec2
                - 0.05381999258943647 * l6 * xi1 * ec2,
            0.1698682704309257 + 0.07485642073680306 * a_s - 0.07677073162624659 * eb
                - 2.4600842051906566 * chi3p * eb - 0.9526869276464951 * chi3pp * eb
                + 0.07677073162624659 * ec + 2.4600842051906566 * chi2 * ec
                + 1.9053738552929902 * chi2p * ec - 2.4600842051906566 * chi3p * ec
                - 0.9526869276464951 * chi3pp * ec + 0.15354146325249318 * ec * eta
                + 0.5559085985144531 * ec * etap + 0.21527997035774585 * ec * etapp
                + 0.6150210512976642 * xi1 + 0.39693455168924163 * a_s * xi1
                - 0.27795429925722653 * eb * xi1 - 1.9053738552929902 * chi3p * eb * xi1
                + 0.27795429925722653 * ec * xi1 + 1.9053738552929902 * chi2 * ec * xi1
                - 1.9053738552929902 * chi3p * ec * xi1 + 0.5559085985144531 * ec * eta * xi1
                + 0.4305599407154917 * ec * etap * xi1 + 0.23817173191162377 * xi2
                + 0.13613547830471903 * a_s * xi2 - 0.10763998517887292 * eb * xi2
                + 0.10763998517887292 * ec * xi2 + 0.21527997035774585 * ec * eta * xi2
                + 0.1698682704309257 * l2 * ec2 + 0.49593518534185227 * l2p * ec2
                + 0.6150210512976642 * l3 * ec2 + 0.47634346382324755 * l3p * ec2
                + 0.07677073162624659 * l5 * ec2 + 0.22413430666779008 * l5p * ec2
                - 0.43149576250971977 * l6 * ec2 - 0.663548583693326 * l6p * ec2
                + 0.6150210512976642 * l2 * xi1 * ec2 + 0.47634346382324755 * l2p * xi1 * ec2
                + 0.47634346382324755 * l3 * xi1 * ec2 + 0.27795429925722653 * l5 * xi1 * ec2
                + 0.21527997035774585 * l5p * xi1 * ec2 - 0.7711885688721989 * l6 * xi1 * ec2
                - 0.4305599407154917 * l6p * xi1 * ec2 + 0.23817173191162377 * l2 * xi2 * ec2
                + 0.10763998517887292 * l5 * xi2 * ec2 - 0.21527997035774585 * l6 * xi2 * ec2,
        ],
        BglFormFactor::T10 => [
            0.009957656651211184 + 0.01660546119080049 * a_s + 0.009957656651211184 * eb
                + 0.009957656651211184 * ec + 0.01991531330242237 * eb * eta
                + 0.01991531330242237 * ec * eta + 0.009957656651211184 * l2 * ec2
                + 0.009957656651211184 * l5 * ec2 - 0.01991531330242237 * l6 * ec2,
            0.09232718324975024 + 0.17721507640356235 * a_s + 0.09232718324975024 * eb
                + 0.3186450128387579 * chi2 * eb - 0.3186450128387579 * chi3p * eb
                + 0.09232718324975024 * ec + 0.3186450128387579 * chi2 * ec
                - 0.3186450128387579 * chi3p * ec + 0.18465436649950048 * eb * eta
                + 0.18465436649950048 * ec * eta + 0.15932250641937895 * eb * etap
                + 0.15932250641937895 * ec * etap + 0.07966125320968948 * xi1
                + 0.1328436895264039 * a_s * xi1 + 0.07966125320968948 * eb * xi1
                + 0.07966125320968948 * ec * xi1 + 0.15932250641937895 * eb * eta * xi1
                + 0.15932250641937895 * ec * eta * xi1 + 0.09232718324975024 * l2 * ec2
                + 0.07966125320968948 * l2p * ec2 + 0.07966125320968948 * l3 * ec2
                + 0.09232718324975024 * l5 * ec2 + 0.07966125320968948 * l5p * ec2
                - 0.26431561970918993 * l6 * ec2 - 0.15932250641937895 * l6p * ec2
                + 0.07966125320968948 * l2 * xi1 * ec2 + 0.07966125320968948 * l5 * xi1 * ec2
                - 0.15932250641937895 * l6 * xi1 * ec2,
            0.31485830348936417 + 0.6551490543074092 * a_s + 0.31485830348936417 * eb
                + 3.591759889669524 * chi2 * eb + 2.549160102710063 * chi2p * eb
                - 3.591759889669524 * chi3p * eb - 1.2745800513550316 * chi3pp * eb
                + 0.31485830348936417 * ec + 3.591759889669524 * chi2 * ec
                + 2.549160102710063 * chi2p * ec - 3.591759889669524 * chi3p * ec
                - 1.2745800513550316 * chi3pp * ec + 0.6297166069787283 * eb * eta
                + 0.6297166069787283 * ec * eta + 1.795879944834762 * eb * etap
                + 1.795879944834762 * ec * etap + 0.6372900256775158 * eb * etapp
                + 0.6372900256775158 * ec * etapp + 0.897939972417381 * xi1
                + 1.6834079902813064 * a_s * xi1 + 0.897939972417381 * eb * xi1
                + 2.549160102710063 * chi2 * eb * xi1 - 2.549160102710063 * chi3p * eb * xi1
                + 0.897939972417381 * ec * xi1 + 2.549160102710063 * chi2 * ec * xi1
                - 2.549160102710063 * chi3p * ec * xi1 + 1.795879944834762 * eb * eta * xi1
                + 1.795879944834762 * ec * eta * xi1 + 1.2745800513550316 * eb * etap * xi1
                + 1.2745800513550316 * ec * etap * xi1 + 0.3186450128387579 * xi2
                + 0.5313747581056155 * a_s * xi2 + 0.3186450128387579 * eb * xi2
                + 0.3186450128387579 * ec * xi2 + 0.6372900256775158 * eb * eta * xi2
                + 0.6372900256775158 * ec * eta * xi2 + 0.31485830348936417 * l2 * ec2
                + 0.738617465998002 * l2p * ec2 + 0.897939972417381 * l3 * ec2
                + 0.6372900256775158 * l3p * ec2 + 0.31485830348936417 * l5 * ec2
                + 0.738617465998002 * l5p * ec2 - 1.5276565793961092 * l6 * ec2
                - 2.11452495767352 * l6p * ec2 + 0.897939972417381 * l2 * xi1 * ec2
                + 0.6372900256775158 * l2p * xi1 * ec2 + 0.6372900256775158 * l3 * xi1 * ec2
                + 0.897939972417381 * l5 * xi1 * ec2 + 0.6372900256775158 * l5p * xi1 * ec2
                - 2.4331699705122776 * l6 * xi1 * ec2 - 1.2745800513550316 * l6p * xi1 * ec2
                + 0.3186450128387579 * l2 * xi2 * ec2 + 0.3186450128387579 * l5 * xi2 * ec2
                - 0.6372900256775158 * l6 * xi2 * ec2,
        ],
    }
}
